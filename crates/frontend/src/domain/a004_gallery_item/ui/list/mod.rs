use contracts::domain::a004_gallery_item::{descriptor, TITLE};
use contracts::shared::{Entity, EntityId};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{DraftForm, LoadGate, MediaPreview, NoticeBanner, PageHeader};
use crate::shared::editing::{EditTarget, EditorViewModel};
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[derive(Debug, Clone, PartialEq)]
enum GalleryModal {
    Closed,
    Create,
    Edit(EntityId),
}

/// Media grid; items are added and edited in a modal over it
#[component]
pub fn GalleryPage() -> impl IntoView {
    let vm = EditorViewModel::for_page(descriptor(), EditTarget::Collection, None);
    vm.load();

    let (modal, set_modal) = signal(GalleryModal::Closed);
    let (pending_delete, set_pending_delete) = signal(None::<Entity>);

    let open_create = move |_| {
        vm.begin_create();
        set_modal.set(GalleryModal::Create);
    };
    let open_edit = move |id: EntityId| {
        if vm.begin_edit(&id) {
            set_modal.set(GalleryModal::Edit(id));
        }
    };
    let close = Callback::new(move |_| {
        vm.cancel();
        set_modal.set(GalleryModal::Closed);
    });
    let saved = Callback::new(move |_| set_modal.set(GalleryModal::Closed));

    let confirm_delete = Callback::new(move |_| {
        if let Some(id) = pending_delete.get_untracked().and_then(|e| e.id) {
            vm.delete(id);
        }
        set_pending_delete.set(None);
    });

    view! {
        <PageFrame page_id="a004_gallery_item--list" category=PAGE_CAT_LIST>
            <PageHeader title="Gallery">
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    " Add Item"
                </Button>
            </PageHeader>
            <NoticeBanner vm=vm />
            <div class="page__content">
                <LoadGate vm=vm>
                    {move || {
                        let items = vm.state.with(|s| s.items.to_vec());
                        if items.is_empty() {
                            return view! { <div class="page__placeholder">"The gallery is empty."</div> }.into_any();
                        }
                        view! {
                            <div class="gallery-grid">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id.clone();
                                        let delete_item = item.clone();
                                        let deleting_id = id.clone();
                                        let deleting = Signal::derive(move || {
                                            deleting_id.as_ref().is_some_and(|id| vm.state.with(|s| s.is_deleting(id)))
                                        });
                                        view! {
                                            <Card attr:class="gallery-tile">
                                                <button
                                                    class="gallery-tile__media"
                                                    on:click=move |_| {
                                                        if let Some(id) = id.clone() {
                                                            open_edit(id);
                                                        }
                                                    }
                                                >
                                                    {item.image.clone().map(|image| view! {
                                                        <MediaPreview image=image alt=item.text(TITLE).to_string() />
                                                    })}
                                                </button>
                                                <div class="gallery-tile__footer">
                                                    <span>{item.text(TITLE).to_string()}</span>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        disabled=deleting
                                                        on_click=move |_| set_pending_delete.set(Some(delete_item.clone()))
                                                        attr:title="Delete"
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </div>
                                            </Card>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                </LoadGate>
            </div>
            {move || {
                let title = match modal.get() {
                    GalleryModal::Closed => return None,
                    GalleryModal::Create => "Add Gallery Item",
                    GalleryModal::Edit(_) => "Edit Gallery Item",
                };
                Some(view! {
                    <Modal title=title on_close=close>
                        <DraftForm vm=vm descriptor=descriptor() on_saved=saved on_cancel=close />
                    </Modal>
                })
            }}
            {move || pending_delete.get().map(|_| view! {
                <ConfirmDialog
                    title="Delete Gallery Item"
                    message="Are you sure you want to delete this item? This cannot be undone."
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                />
            })}
        </PageFrame>
    }
}
