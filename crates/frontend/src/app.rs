use crate::domain::a001_employee::ui::registration::EmployeeRegistration;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <EmployeeRegistration />
        </main>
    }
}
