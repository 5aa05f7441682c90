use super::state::FormEvent;
use super::view_model::RegistrationViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_employee::RegistrationField;
use leptos::prelude::*;

#[component]
fn FormField(
    vm: RegistrationViewModel,
    field: RegistrationField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    view! {
        <Input
            id=field.key()
            label=label
            placeholder=placeholder
            value=Signal::derive(move || vm.field_value(field))
            on_input=Callback::new(move |value: String| vm.edit(field, value))
            error=Signal::derive(move || vm.field_error(field))
            disabled=Signal::derive(move || vm.is_busy())
            input_mode={if numeric { "numeric" } else { "text" }}
        />
    }
}

#[component]
pub fn EmployeeRegistration() -> impl IntoView {
    let vm = RegistrationViewModel::new();
    let form = vm.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.dispatch(FormEvent::SubmitRequested);
    };

    let employee_number = move || form.with(|f| f.employee_number().into_inner());

    view! {
        <div class="registration-container">
            <div class="registration-box">
                <h1>"Employee Registration"</h1>

                <form class="form" on:submit=on_submit novalidate>
                    <FormField
                        vm=vm
                        field=RegistrationField::FirstName
                        label="First name"
                        placeholder="Jane"
                    />
                    <FormField
                        vm=vm
                        field=RegistrationField::Surname
                        label="Surname"
                        placeholder="Doe"
                    />
                    <FormField
                        vm=vm
                        field=RegistrationField::IdNumber
                        label="ID number"
                        placeholder="13 digits"
                        numeric=true
                    />

                    <div class="form__group">
                        <label class="form__label" for="employeeNumber">"Employee number"</label>
                        <output id="employeeNumber" class="form__output">
                            {move || {
                                let value = employee_number();
                                if value.is_empty() { "-".to_string() } else { value }
                            }}
                        </output>
                    </div>

                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || vm.is_busy())
                    >
                        {icon("save")}
                        {move || if vm.is_busy() { "Submitting..." } else { "Register" }}
                    </Button>
                </form>
            </div>

            <Show when=move || form.with(|f| f.message().is_some())>
                {move || {
                    let (title, body, success) = form.with(|f| {
                        let title = if f.is_success() { "Registration complete" } else { "Registration failed" };
                        (title, f.message().unwrap_or_default().to_string(), f.is_success())
                    });
                    view! {
                        <Modal
                            title=title.to_string()
                            on_close=Callback::new(move |_| vm.dispatch(FormEvent::Dismissed))
                        >
                            <p class={if success { "message message--success" } else { "message message--error" }}>
                                {if success { icon("check") } else { icon("alert") }}
                                {body}
                            </p>
                        </Modal>
                    }
                }}
            </Show>
        </div>
    }
}
