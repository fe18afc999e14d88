use contracts::domain::a003_certificate::descriptor;
use leptos::prelude::*;

use crate::shared::components::ResourceDetailsPage;

#[component]
pub fn CertificateDetails() -> impl IntoView {
    view! {
        <ResourceDetailsPage
            descriptor=descriptor()
            page_id="a003_certificate--detail"
            return_route="/certificates"
        />
    }
}
