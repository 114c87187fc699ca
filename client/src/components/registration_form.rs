//! Name/email form with inline error and success alerts.
//!
//! DESIGN
//! ======
//! Inputs and the submit button are disabled while a registration is in
//! flight, so a second submission cannot be started from the UI. The state
//! machine refuses it as well.

#[cfg(test)]
#[path = "registration_form_test.rs"]
mod registration_form_test;

use leptos::prelude::*;

use crate::state::registration::RegistrationState;

/// Submit button caption for the current phase.
pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "⏳ Registering..." } else { "➕ Register User" }
}

#[component]
pub fn RegistrationForm(state: RwSignal<RegistrationState>, on_submit: Callback<()>) -> impl IntoView {
    let submitting = move || state.with(RegistrationState::is_submitting);

    view! {
        <div class="section">
            <h2>"📝 Register New User"</h2>

            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <div class="form-group">
                    <label for="name">"Name:"</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Enter the user's name"
                        prop:value=move || state.with(|s| s.draft.name.clone())
                        on:input=move |ev| state.update(|s| s.set_name(event_target_value(&ev)))
                        disabled=submitting
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email:"</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="Enter the user's email"
                        prop:value=move || state.with(|s| s.draft.email.clone())
                        on:input=move |ev| state.update(|s| s.set_email(event_target_value(&ev)))
                        disabled=submitting
                    />
                </div>

                <Show when=move || state.with(|s| s.error.is_some())>
                    <div class="alert alert-error">
                        "❌ " {move || state.with(|s| s.error.clone().unwrap_or_default())}
                    </div>
                </Show>

                <Show when=move || state.with(|s| s.success.is_some())>
                    <div class="alert alert-success">
                        {move || state.with(|s| s.success.clone().unwrap_or_default())}
                    </div>
                </Show>

                <button type="submit" disabled=submitting>
                    {move || submit_label(submitting())}
                </button>
            </form>
        </div>
    }
}
