use contracts::domain::a001_product::{descriptor, CATEGORY, DESCRIPTION, NAME};
use leptos::prelude::*;

use crate::shared::components::{CardFields, ResourceListPage};

#[component]
pub fn ProductList() -> impl IntoView {
    view! {
        <ResourceListPage
            descriptor=descriptor()
            page_id="a001_product--list"
            heading="Our Products"
            card=CardFields::titled(NAME).with_subtitle(CATEGORY).with_body(DESCRIPTION)
            add_route="/add-product"
            edit_route="/edit-product"
            searchable=true
        />
    }
}
