use contracts::domain::a001_product::descriptor;
use leptos::prelude::*;

use crate::shared::components::ResourceDetailsPage;

/// `/add-product` and `/edit-product/:id`
#[component]
pub fn ProductDetails() -> impl IntoView {
    view! {
        <ResourceDetailsPage
            descriptor=descriptor()
            page_id="a001_product--detail"
            return_route="/products"
        />
    }
}
