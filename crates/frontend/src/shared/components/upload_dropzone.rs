use contracts::domain::a004_gallery_item::is_video;
use contracts::shared::{ImageRef, ImageSlot};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen_futures::JsFuture;

use crate::shared::api_utils::resolve_api_base;
use crate::shared::config::use_config;
use crate::shared::editing::{EditorViewModel, PickedFile};
use crate::shared::icons::icon;

/// Reads every file of a picker or a drop into memory
pub async fn read_picked_files(files: web_sys::FileList) -> Vec<PickedFile> {
    let mut picked = Vec::new();
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        // Читаем файл как ArrayBuffer
        match JsFuture::from(file.array_buffer()).await {
            Ok(array_buffer) => {
                let uint8_array = js_sys::Uint8Array::new(&array_buffer);
                let mut bytes = vec![0; uint8_array.length() as usize];
                uint8_array.copy_to(&mut bytes);
                picked.push(PickedFile::new(file.name(), file.type_(), bytes));
            }
            Err(e) => log::error!("Failed to read {}: {:?}", file.name(), e),
        }
    }
    picked
}

/// Image or video for a stored or staged reference
#[component]
pub fn MediaPreview(image: ImageRef, #[prop(optional, into)] alt: String) -> impl IntoView {
    let api_base = resolve_api_base(&use_config());
    let src = image.resolve(&api_base);
    if !image.is_pending() && is_video(&src) {
        view! { <video class="media-preview" src=src controls=true /> }.into_any()
    } else {
        view! { <img class="media-preview" src=src alt=alt /> }.into_any()
    }
}

/// File picker with drag-and-drop and a preview of the staged or stored file
#[component]
pub fn UploadDropzone(vm: EditorViewModel, image_slot: ImageSlot) -> impl IntoView {
    let (dragging, set_dragging) = signal(false);
    let input_id = format!("upload-{}", image_slot.form_field);
    let disabled = move || vm.state.with(|s| !s.editable || s.is_saving());

    let stage = move |files: web_sys::FileList| {
        spawn_local(async move {
            let picked = read_picked_files(files).await;
            if !picked.is_empty() {
                vm.stage_files(picked);
            }
        });
    };

    let on_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            stage(files);
        }
        // the same file may be picked again after a clear
        input.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if disabled() {
            return;
        }
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            stage(files);
        }
    };

    let zone_class = move || {
        if dragging.get() {
            "dropzone dropzone--active"
        } else {
            "dropzone"
        }
    };
    let required_hint = if image_slot.required { " *" } else { "" };
    let error = move || vm.state.with(|s| s.error_for(image_slot.form_field).map(ToString::to_string));

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id.clone()>
                "Upload Image"
                {required_hint}
            </label>
            <div
                class=zone_class
                on:dragover=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=on_drop
            >
                {move || match vm.state.with(|s| s.preview.clone()) {
                    Some(image) => view! { <MediaPreview image=image alt="Preview" /> }.into_any(),
                    None => view! {
                        <div class="dropzone__hint">
                            {icon("upload")}
                            <span>"Drag & drop a file here or click to browse"</span>
                        </div>
                    }.into_any(),
                }}
                <input
                    id=input_id
                    class="dropzone__input"
                    type="file"
                    accept=image_slot.accept.input_accept()
                    disabled=disabled
                    on:change=on_change
                />
            </div>
            {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
            <Show when=move || vm.state.with(|s| s.upload_staged)>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| vm.clear_upload()
                >
                    {icon("x")}
                    " Remove selected file"
                </Button>
            </Show>
        </div>
    }
}
