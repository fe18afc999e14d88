use contracts::domain::a007_about::section_descriptor;
use leptos::prelude::*;

use crate::shared::components::ResourceDetailsPage;

/// `/preview/:id`: edit one section
#[component]
pub fn AboutSectionPreview() -> impl IntoView {
    view! {
        <ResourceDetailsPage
            descriptor=section_descriptor()
            page_id="a007_about--detail"
            return_route="/about"
            heading="Preview"
        />
    }
}
