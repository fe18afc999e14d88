use contracts::domain::a008_contact_info::descriptor;
use leptos::prelude::*;

use crate::shared::components::SingletonPage;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <SingletonPage descriptor=descriptor() page_id="a008_contact_info--singleton" heading="Contact Us" />
    }
}
