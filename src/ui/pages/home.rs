//! Home page component
//!
//! Default destination after passing the gate. The application proper lives
//! behind this route; the placeholder keeps the navigation target real.

use leptos::prelude::*;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-title">"Anteroom"</h1>
            <p class="home-subtitle">"You are signed in."</p>
        </div>
    }
}
