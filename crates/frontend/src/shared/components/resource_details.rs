use contracts::shared::{EntityId, ResourceDescriptor};
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::entity_form::EntityForm;
use super::notice_banner::{LoadGate, NoticeBanner};
use super::page_header::PageHeader;
use super::upload_dropzone::UploadDropzone;
use crate::shared::editing::{EditTarget, EditorViewModel};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

/// Add form when the route has no `:id`, edit form otherwise
#[component]
pub fn ResourceDetailsPage(
    descriptor: ResourceDescriptor,
    page_id: &'static str,
    /// Where save and cancel lead
    return_route: &'static str,
    /// Overrides the "Add …" / "Edit …" heading
    #[prop(optional)]
    heading: Option<&'static str>,
) -> impl IntoView {
    let id = use_params_map()
        .with_untracked(|params| params.get("id"))
        .filter(|id| !id.trim().is_empty())
        .map(EntityId::new);

    let title = match (heading, &id) {
        (Some(heading), _) => heading.to_string(),
        (None, Some(_)) => format!("Edit {}", descriptor.title),
        (None, None) => format!("Add {}", descriptor.title),
    };
    let target = match id {
        Some(id) => EditTarget::Existing(id),
        None => EditTarget::New,
    };

    let vm = EditorViewModel::for_page(descriptor.clone(), target, Some(return_route));
    vm.load();

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_DETAIL>
            <PageHeader title=title />
            <NoticeBanner vm=vm />
            <div class="page__content">
                <LoadGate vm=vm>
                    <DraftForm vm=vm descriptor=descriptor.clone() />
                </LoadGate>
            </div>
        </PageFrame>
    }
}

/// Schema fields, the image slot if any, and Save / Cancel
#[component]
pub fn DraftForm(
    vm: EditorViewModel,
    descriptor: ResourceDescriptor,
    /// Replaces Cancel with "Discard changes" (reload from the server)
    #[prop(optional)]
    discard: bool,
    /// Runs after a successful save
    #[prop(optional)]
    on_saved: Option<Callback<()>>,
    /// Runs instead of the editor's own cancel
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let saving = Signal::derive(move || vm.state.with(|s| s.is_saving()));
    let dirty = Signal::derive(move || vm.state.with(|s| s.dirty || s.upload_staged));

    let submit = move || match on_saved {
        Some(callback) => vm.submit_then(move |_| callback.run(())),
        None => vm.submit(),
    };

    let secondary = if discard {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || saving.get() || !dirty.get())
                on_click=move |_| vm.discard_and_reload()
            >
                {icon("refresh")}
                " Discard changes"
            </Button>
        }
        .into_any()
    } else {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=saving
                on_click=move |_| match on_cancel {
                    Some(callback) => callback.run(()),
                    None => vm.cancel(),
                }
            >
                "Cancel"
            </Button>
        }
        .into_any()
    };

    // Enter in a field clicks Save; the native submission itself is suppressed
    view! {
        <form class="details-form" on:submit=move |ev: ev::SubmitEvent| ev.prevent_default()>
            <EntityForm vm=vm schema=descriptor.schema.clone() />
            {descriptor.image.map(|image_slot| view! { <UploadDropzone vm=vm image_slot=image_slot /> })}
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary disabled=saving on_click=move |_| submit()>
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save Changes" }}
                </Button>
                {secondary}
                <Show when=move || dirty.get()>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                        "Unsaved changes"
                    </Badge>
                </Show>
            </div>
        </form>
    }
}
