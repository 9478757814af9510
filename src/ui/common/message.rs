//! Reusable message components for displaying inline form feedback.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
