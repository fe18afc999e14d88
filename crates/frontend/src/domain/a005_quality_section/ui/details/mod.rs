use contracts::domain::a005_quality_section::descriptor;
use leptos::prelude::*;

use crate::shared::components::ResourceDetailsPage;

#[component]
pub fn QualitySectionPreview() -> impl IntoView {
    view! {
        <ResourceDetailsPage
            descriptor=descriptor()
            page_id="a005_quality_section--detail"
            return_route="/our-quality"
            heading="Preview"
        />
    }
}
