use contracts::shared::ResourceDescriptor;
use leptos::prelude::*;

use super::notice_banner::{LoadGate, NoticeBanner};
use super::page_header::PageHeader;
use super::resource_details::DraftForm;
use crate::shared::editing::{EditTarget, EditorViewModel};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SINGLETON};

/// Page editing the one record at a resource path (contact info, showcase)
#[component]
pub fn SingletonPage(
    descriptor: ResourceDescriptor,
    page_id: &'static str,
    #[prop(into)]
    heading: String,
) -> impl IntoView {
    let vm = EditorViewModel::for_page(descriptor.clone(), EditTarget::Singleton, None);
    vm.load();

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_SINGLETON>
            <PageHeader title=heading />
            <NoticeBanner vm=vm />
            <div class="page__content">
                <SingletonSection vm=vm descriptor=descriptor />
            </div>
        </PageFrame>
    }
}

/// Singleton form block, usable above a section list
#[component]
pub fn SingletonSection(vm: EditorViewModel, descriptor: ResourceDescriptor) -> impl IntoView {
    view! {
        <section class="page__section">
            <LoadGate vm=vm>
                <DraftForm vm=vm descriptor=descriptor.clone() discard=true />
            </LoadGate>
        </section>
    }
}
