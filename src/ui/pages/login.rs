//! Login page component
//!
//! The standalone gate page. Everything behind the router except this page
//! assumes an authenticated session.

use leptos::prelude::*;

use crate::ui::auth::LoginForm;
use crate::ui::icon::{Icon, icons};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-logo">
                    <Icon name=icons::KEY class="login-logo-icon"/>
                </div>
                <h1 class="login-title">"Anteroom"</h1>
                <LoginForm />
            </div>
        </div>
    }
}
