//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::register::RegisterPage;
use crate::state::registration::RegistrationState;
use crate::util::config::{API_BASE_META, ApiConfig};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host provides an [`ApiConfig`] through context; it is echoed into a
/// `<meta>` tag so the hydrated client talks to the same Users API.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content={config.base_url}/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and the registration state, then routes
/// `/` to the registration page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(config);

    let registration = RwSignal::new(RegistrationState::default());
    provide_context(registration);

    view! {
        <Title text="User Registration"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
