use contracts::domain::a002_event::{descriptor, DATE, DESCRIPTION, TITLE};
use leptos::prelude::*;

use crate::shared::components::{CardFields, ResourceListPage};

#[component]
pub fn EventList() -> impl IntoView {
    view! {
        <ResourceListPage
            descriptor=descriptor()
            page_id="a002_event--list"
            heading="Events"
            card=CardFields::titled(TITLE).with_subtitle(DATE).with_body(DESCRIPTION)
            add_route="/add-event"
            edit_route="/edit-event"
        />
    }
}
