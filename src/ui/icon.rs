use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for styling
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Named icons shipped under `public/icons/`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const KEY: &str = "key";
}
