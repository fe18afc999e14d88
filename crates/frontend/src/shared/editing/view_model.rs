use contracts::shared::{Entity, EntityId, FieldValue, ResourceDescriptor};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::controller::{
    load_all, EditTarget, EditorConfig, EditorSnapshot, ResourceEditingController, SaveOutcome,
};
use super::navigation::RouterNavigator;
use super::notice::NoticeExpiry;
use super::upload::PickedFile;
use crate::shared::api_utils::api_client;
use crate::shared::config::use_config;

/// ViewModel wrapping one editing controller for a Leptos page.
///
/// `state` is refreshed after every controller transition; commands run on
/// `spawn_local`. Success notices clear themselves after `success_timeout_ms`.
#[derive(Clone, Copy)]
pub struct EditorViewModel {
    controller: StoredValue<ResourceEditingController, LocalStorage>,
    pub state: RwSignal<EditorSnapshot>,
}

impl EditorViewModel {
    pub fn new(controller: ResourceEditingController, success_timeout_ms: u32) -> Self {
        let state = RwSignal::new(controller.snapshot());
        let stored = StoredValue::new_local(controller.clone());

        let expiry = NoticeExpiry::default();
        controller.subscribe(move |snapshot: EditorSnapshot| {
            if let Some(id) = expiry.needs_timer(snapshot.notice.as_ref()) {
                spawn_local(async move {
                    TimeoutFuture::new(success_timeout_ms).await;
                    // a newer notice keeps its place
                    stored.try_with_value(|c| c.dismiss_notice_if(id));
                });
            }
            state.try_set(snapshot);
        });

        on_cleanup(move || {
            stored.try_with_value(|c| c.dispose());
        });

        Self {
            controller: stored,
            state,
        }
    }

    /// Controller wired to the app config, the browser session and the router
    pub fn for_page(
        descriptor: ResourceDescriptor,
        target: EditTarget,
        return_route: Option<&'static str>,
    ) -> Self {
        let config = use_config();
        let mut editor_config = EditorConfig::from_app(&config);
        if let Some(route) = return_route {
            editor_config = editor_config.returning_to(route);
        }
        let controller = ResourceEditingController::new(
            descriptor,
            target,
            api_client(&config),
            Rc::new(RouterNavigator::new()),
            editor_config,
        );
        Self::new(controller, config.notices.success_timeout_ms)
    }

    fn controller(&self) -> Option<ResourceEditingController> {
        self.controller.try_get_value()
    }

    /// Fetch the page's resource
    pub fn load(&self) {
        if let Some(controller) = self.controller() {
            spawn_local(async move {
                let _ = controller.load().await;
            });
        }
    }

    /// Fetch several view models' resources together (page intro + sections)
    pub fn load_together(models: &[EditorViewModel]) {
        let controllers: Vec<_> = models.iter().filter_map(|vm| vm.controller()).collect();
        spawn_local(async move {
            let _ = load_all(&controllers).await;
        });
    }

    pub fn set_text(&self, name: &'static str, value: String) {
        self.set_field(name, FieldValue::Text(value));
    }

    pub fn set_flag(&self, name: &'static str, value: bool) {
        self.set_field(name, FieldValue::Flag(value));
    }

    pub fn set_field(&self, name: &str, value: FieldValue) {
        self.controller.try_with_value(|c| {
            if let Err(e) = c.set_field(name, value) {
                log::warn!("{}: {}", c.descriptor().name, e);
            }
        });
    }

    pub fn stage_files(&self, files: Vec<PickedFile>) {
        self.controller.try_with_value(|c| {
            // rejection is already on the notice line
            let _ = c.stage_files(files);
        });
    }

    pub fn clear_upload(&self) {
        self.controller.try_with_value(|c| c.clear_upload());
    }

    pub fn begin_create(&self) {
        self.controller.try_with_value(|c| c.begin_create());
    }

    pub fn begin_edit(&self, id: &EntityId) -> bool {
        self.controller
            .try_with_value(|c| c.begin_edit(id))
            .unwrap_or(false)
    }

    pub fn submit(&self) {
        self.submit_then(|_| {});
    }

    /// Save, then hand the stored entity to `on_saved`
    pub fn submit_then(&self, on_saved: impl FnOnce(Entity) + 'static) {
        if let Some(controller) = self.controller() {
            spawn_local(async move {
                if let Ok(SaveOutcome::Saved(entity)) = controller.submit().await {
                    on_saved(entity);
                }
            });
        }
    }

    pub fn delete(&self, id: EntityId) {
        if let Some(controller) = self.controller() {
            spawn_local(async move {
                let _ = controller.delete(&id).await;
            });
        }
    }

    pub fn cancel(&self) {
        self.controller.try_with_value(|c| c.cancel());
    }

    pub fn discard_and_reload(&self) {
        if let Some(controller) = self.controller() {
            spawn_local(async move {
                let _ = controller.discard_and_reload().await;
            });
        }
    }

    pub fn dismiss_notice(&self) {
        self.controller.try_with_value(|c| c.dismiss_notice());
    }
}
