use contracts::domain::a009_showcase::descriptor;
use leptos::prelude::*;

use crate::shared::components::SingletonPage;

/// Showcase (page 10): title, description, active flag and main image
#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <SingletonPage descriptor=descriptor() page_id="a009_showcase--singleton" heading="Showcase" />
    }
}
