use contracts::domain::a002_event::descriptor;
use leptos::prelude::*;

use crate::shared::components::ResourceDetailsPage;

#[component]
pub fn EventDetails() -> impl IntoView {
    view! {
        <ResourceDetailsPage
            descriptor=descriptor()
            page_id="a002_event--detail"
            return_route="/events"
        />
    }
}
