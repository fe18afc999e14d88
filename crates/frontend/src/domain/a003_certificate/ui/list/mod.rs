use contracts::domain::a003_certificate::{descriptor, CERTIFICATE_BODY, CERTIFICATE_NUMBER};
use leptos::prelude::*;

use crate::shared::components::{CardFields, ResourceListPage};

#[component]
pub fn CertificateList() -> impl IntoView {
    view! {
        <ResourceListPage
            descriptor=descriptor()
            page_id="a003_certificate--list"
            heading="Certificates"
            card=CardFields::titled(CERTIFICATE_BODY).with_subtitle(CERTIFICATE_NUMBER)
            add_route="/add-certificate"
            edit_route="/edit-certificate"
        />
    }
}
