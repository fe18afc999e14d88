use leptos::prelude::*;

use super::{api, storage};
use crate::shared::http::HttpResourceClient;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Session left in `localStorage` by a previous login
    pub fn restore() -> Self {
        Self {
            token: storage::get_token(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::restore());
    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().unwrap_or_else(|| {
        log::error!("AuthProvider not found in component tree");
        RwSignal::new(AuthState::restore())
    })
}

/// Helper: Perform login and publish the new session
pub async fn do_login(
    auth_state: RwSignal<AuthState>,
    client: &HttpResourceClient,
    username: String,
    password: String,
) -> Result<(), String> {
    let token = api::login(client, username, password).await?;

    storage::save_token(&token);
    auth_state.set(AuthState { token: Some(token) });
    log::info!("Operator signed in");

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(auth_state: RwSignal<AuthState>) {
    storage::clear_token();
    auth_state.set(AuthState::default());
    log::info!("Operator signed out");
}
