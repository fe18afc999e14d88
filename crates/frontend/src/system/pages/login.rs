use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::api_utils::api_client;
use crate::shared::config::use_config;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth_state = use_auth();
    let config = use_config();
    let navigate = use_navigate();

    let sign_in = move || {
        if is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let client = api_client(&config);
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(auth_state, &client, username_val, password_val).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Salvia Naturals"</h1>
                <h2>"Admin Login"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                // Enter in a field clicks Login
                <form on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                    <Flex vertical=true>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <Input
                                value=username
                                attr:id="username"
                                placeholder="Enter username"
                                disabled=Signal::from(is_loading)
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <Input
                                value=password
                                attr:id="password"
                                input_type=InputType::Password
                                placeholder="Enter password"
                                disabled=Signal::from(is_loading)
                            />
                        </div>

                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::from(is_loading)
                            on_click=move |_| sign_in()
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Login" }}
                        </Button>
                    </Flex>
                </form>
            </div>
        </div>
    }
}
