use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{HomePage, LoginPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // Runtime configuration for the client, sampled by the login
                // form once per mount
                <script inner_html=runtime_config_script()></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Build the `window.RUNTIME_CONFIG` snippet from the server environment.
#[cfg(feature = "ssr")]
fn runtime_config_script() -> String {
    let config = crate::core::config::Config::from_env();
    let json = serde_json::to_string(&config.runtime_config())
        .unwrap_or_else(|_| "{}".to_string());
    format!("window.RUNTIME_CONFIG = {};", json)
}

#[cfg(not(feature = "ssr"))]
fn runtime_config_script() -> String {
    String::new()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/anteroom.css"/>

        // sets the document title
        <Title text="Anteroom"/>

        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
