//! Login form component
//!
//! The credential-entry form for the access gate. Its shape comes from the
//! runtime configuration: account-backed deployments ask for a username and
//! may offer registration, localStorage deployments ask for the shared
//! password only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::core::RuntimeConfig;
use crate::core::auth;
use crate::ui::common::ErrorMessage;
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    // Form state, owned by this instance and gone with it
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Shape flags, fixed for the lifetime of the mount
    let ask_username = RwSignal::new(false);
    let allow_register = RwSignal::new(false);

    // Sample the injected runtime config once, after hydration
    Effect::new(move |_| {
        let config = RuntimeConfig::from_window();
        ask_username.set(config.asks_username());
        allow_register.set(config.register_enabled);
    });

    // The redirect target is read at submit time, not at mount
    let redirect_target =
        move || auth::resolve_redirect(query.get_untracked().get("redirect").as_deref());

    let navigate_login = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let ask = ask_username.get_untracked();
        let password_val = password.get_untracked();
        let username_val = username.get_untracked();
        if !auth::submit_allowed(
            &password_val,
            &username_val,
            ask,
            loading.get_untracked(),
        ) {
            return;
        }

        error.set(None);
        loading.set(true);

        let target = redirect_target();
        let navigate = navigate_login.clone();
        spawn_local(async move {
            let sent_username = if ask { Some(username_val) } else { None };
            match auth::submit_login(password_val, sent_username).await {
                Ok(()) => {
                    loading.try_set(false);
                    // Replace history so Back does not land on the gate again
                    navigate(
                        &target,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => {
                    // try_set: the form may have been unmounted mid-flight
                    error.try_set(Some(err.to_string()));
                    loading.try_set(false);
                }
            }
        });
    };

    let navigate_register = navigate.clone();
    let on_register = move |_| {
        let password_val = password.get_untracked();
        let username_val = username.get_untracked();
        if !auth::register_allowed(&password_val, &username_val, loading.get_untracked()) {
            return;
        }

        error.set(None);
        loading.set(true);

        let target = redirect_target();
        let navigate = navigate_register.clone();
        spawn_local(async move {
            match auth::submit_register(username_val, password_val).await {
                Ok(()) => {
                    loading.try_set(false);
                    navigate(
                        &target,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                    loading.try_set(false);
                }
            }
        });
    };

    let login_disabled = move || {
        !auth::submit_allowed(
            &password.get(),
            &username.get(),
            ask_username.get(),
            loading.get(),
        )
    };
    let register_disabled =
        move || !auth::register_allowed(&password.get(), &username.get(), loading.get());

    view! {
        <form on:submit=on_submit class="login-form">
            <Show when=move || ask_username.get()>
                <input
                    type="text"
                    id="username"
                    name="username"
                    autocomplete="username"
                    placeholder="Username"
                    class="form-input"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </Show>

            <input
                type="password"
                id="password"
                name="password"
                autocomplete="current-password"
                placeholder="Access password"
                class="form-input"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />

            <ErrorMessage error=error />

            <div class="form-actions">
                <Show when=move || ask_username.get() && allow_register.get()>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled=register_disabled
                        on:click=on_register.clone()
                    >
                        {move || {
                            if loading.get() {
                                view! {
                                    <span class="btn-busy">
                                        <Icon name=icons::LOADER class="icon-spin"/>
                                    </span>
                                }
                                    .into_any()
                            } else {
                                view! { <span>"Register"</span> }.into_any()
                            }
                        }}
                    </button>
                </Show>
                <button type="submit" class="btn btn-primary" disabled=login_disabled>
                    {move || {
                        if loading.get() {
                            view! {
                                <span class="btn-busy">
                                    <Icon name=icons::LOADER class="icon-spin"/>
                                    "Signing in..."
                                </span>
                            }
                                .into_any()
                        } else {
                            view! { <span>"Sign In"</span> }.into_any()
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
