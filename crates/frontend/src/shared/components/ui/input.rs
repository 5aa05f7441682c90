use leptos::prelude::*;

/// Text input with label and inline error message
///
/// The element value is bound as a property, so a handler that rewrites the
/// entered text (e.g. stripping characters) is reflected immediately.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Inline error shown under the input
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// `inputmode` hint for virtual keyboards: "text" (default), "numeric", ...
    #[prop(optional, into)]
    input_mode: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let error_id = move || format!("{}-error", input_id());
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_mode = move || input_mode.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.with(|e| e.is_some());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || if has_error() { "form__input form__input--invalid" } else { "form__input" }
                type="text"
                inputmode=input_mode
                autocomplete="off"
                placeholder=input_placeholder
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <span id=error_id class="form__error">{message}</span>
            })}
        </div>
    }
}
