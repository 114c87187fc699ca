//! Registration page: the form above the roster.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads the roster once on mount (browser only),
//! and spawns the register/refresh flows from `register_flow` on user action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::registration_form::RegistrationForm;
use crate::components::roster_list::RosterList;
use crate::net::api::HttpUsersApi;
use crate::pages::register_flow::{load_roster, submit_registration};
use crate::state::registration::RegistrationState;
use crate::util::config::ApiConfig;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = expect_context::<RwSignal<RegistrationState>>();
    let api = HttpUsersApi::new(expect_context::<ApiConfig>());

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        spawn_local(async move { load_roster(&api, &state).await });
    }

    let on_submit = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = submit_registration(&api, &state).await {
                    log::debug!("registration not completed: {err}");
                }
            });
        }
    });

    let on_refresh = Callback::new(move |()| {
        let api = api.clone();
        spawn_local(async move { load_roster(&api, &state).await });
    });

    view! {
        <div class="app">
            <div class="container">
                <h1>"👥 User Registration"</h1>
                <RegistrationForm state=state on_submit=on_submit/>
                <RosterList state=state on_refresh=on_refresh/>
            </div>
        </div>
    }
}
