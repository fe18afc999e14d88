use contracts::domain::a006_rnd::section_descriptor;
use leptos::prelude::*;

use crate::shared::components::ResourceDetailsPage;

/// `/r-and-d-preview/:id`: edit one section
#[component]
pub fn RndSectionPreview() -> impl IntoView {
    view! {
        <ResourceDetailsPage
            descriptor=section_descriptor()
            page_id="a006_rnd--detail"
            return_route="/r-and-d"
            heading="Preview"
        />
    }
}
