use contracts::domain::a005_quality_section::{descriptor, DETAILS, NAME};
use leptos::prelude::*;

use crate::shared::components::{CardFields, CollectionGrid, NoticeBanner, PageHeader};
use crate::shared::editing::{EditTarget, EditorViewModel};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// "Our Quality Commitment": the list of sections, each opened in its preview
#[component]
pub fn QualityPage() -> impl IntoView {
    let vm = EditorViewModel::for_page(descriptor(), EditTarget::Collection, None);
    vm.load();

    view! {
        <PageFrame page_id="a005_quality_section--list" category=PAGE_CAT_LIST>
            <PageHeader title="Our Quality Commitment" subtitle="Sections shown on the quality page" />
            <NoticeBanner vm=vm />
            <div class="page__content">
                <CollectionGrid
                    vm=vm
                    descriptor=descriptor()
                    card=CardFields::titled(NAME).with_body(DETAILS)
                    edit_route="/quality-preview"
                />
            </div>
        </PageFrame>
    }
}
