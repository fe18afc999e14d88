use contracts::domain::a006_rnd::{page_descriptor, section_descriptor, DETAILS, NAME};
use leptos::prelude::*;

use crate::shared::components::{CardFields, CollectionGrid, NoticeBanner, PageHeader, SingletonSection};
use crate::shared::editing::{EditTarget, EditorViewModel};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SINGLETON};

/// Page intro form above the list of sections; both load together
#[component]
pub fn RndPage() -> impl IntoView {
    let intro = EditorViewModel::for_page(page_descriptor(), EditTarget::Singleton, None);
    let sections = EditorViewModel::for_page(section_descriptor(), EditTarget::Collection, None);
    EditorViewModel::load_together(&[intro, sections]);

    view! {
        <PageFrame page_id="a006_rnd--singleton" category=PAGE_CAT_SINGLETON>
            <PageHeader title="Research & Development" />
            <NoticeBanner vm=intro />
            <div class="page__content">
                <SingletonSection vm=intro descriptor=page_descriptor() />
                <section class="page__section">
                    <h2 class="page__section-title">"Sections"</h2>
                    <NoticeBanner vm=sections />
                    <CollectionGrid
                        vm=sections
                        descriptor=section_descriptor()
                        card=CardFields::titled(NAME).with_body(DETAILS)
                        edit_route="/r-and-d-preview"
                    />
                </section>
            </div>
        </PageFrame>
    }
}
