use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to the default configuration", e);
        AppConfig::default()
    });
    log::debug!("API base: {:?}", config.api.base_url);
    provide_context(config);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ConfigProvider>
    }
}
