//! Load → edit → validate → save → reconcile → report, for any resource.
//!
//! One controller drives one page. State lives behind `Rc<RefCell<..>>` and
//! is never borrowed across an `.await`; the only suspension points are the
//! client calls. Every load bumps a generation counter and late responses
//! from an older generation, or arriving after [`ResourceEditingController::dispose`],
//! are dropped.

use contracts::shared::{
    Entity, EntityId, FetchOne, FieldError, FieldValue, ImageRef, Payload, ResourceDescriptor,
    UpdateRoute,
};
use futures::future::join_all;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::collection::CollectionStore;
use super::draft::{DraftError, FormDraftState};
use super::error::EditError;
use super::lock::{LockTarget, OperationLocks};
use super::navigation::Navigator;
use super::notice::{Notice, NoticeKind};
use super::upload::{PickedFile, UploadPolicy, UploadStagingArea};
use crate::shared::config::AppConfig;
use crate::shared::http::{
    ApiRequest, HttpFailure, HttpMethod, HttpResourceClient, MultipartForm, RequestBody,
};

// ============================================================================
// Configuration
// ============================================================================

/// What a save without edits does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnchangedSavePolicy {
    /// Send the request anyway
    Submit,
    /// Silently do nothing
    #[default]
    Skip,
    /// Report "No changes to save"
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub unchanged_save: UnchangedSavePolicy,
    /// List route to go back to after save or cancel
    pub return_route: Option<String>,
    pub max_upload_bytes: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::from_app(&AppConfig::default())
    }
}

impl EditorConfig {
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            unchanged_save: config.editing.unchanged_save,
            return_route: None,
            max_upload_bytes: config.uploads.max_bytes,
        }
    }

    pub fn returning_to(mut self, route: impl Into<String>) -> Self {
        self.return_route = Some(route.into());
        self
    }

    pub fn with_policy(mut self, policy: UnchangedSavePolicy) -> Self {
        self.unchanged_save = policy;
        self
    }
}

/// What a controller loads on mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// The whole list (list pages)
    Collection,
    /// The one record at the resource path (page intros, site info)
    Singleton,
    /// One record of a collection (edit pages)
    Existing(EntityId),
    /// Nothing: a create form
    New,
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Saving,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Result of a fetch, applied later by [`ResourceEditingController::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    One(Entity),
    Many(Vec<Entity>),
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Same target already has a request in flight
    InFlight,
    /// No edits and the policy says skip
    Unchanged,
    /// The resource has not loaded
    NotLoaded,
    /// The page went away while the request was running
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(Entity),
    Skipped(SkipReason),
}

/// Everything a view renders, copied out of the controller
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub phase: Phase,
    pub editable: bool,
    pub fields: BTreeMap<String, FieldValue>,
    pub draft_id: Option<EntityId>,
    pub is_new: bool,
    pub dirty: bool,
    pub field_errors: Vec<FieldError>,
    pub notice: Option<Notice>,
    pub items: CollectionStore,
    pub preview: Option<ImageRef>,
    pub upload_staged: bool,
    pub deleting: Vec<EntityId>,
}

impl EditorSnapshot {
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(FieldValue::to_form_value)
            .unwrap_or_default()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .and_then(FieldValue::as_flag)
            .unwrap_or(false)
    }

    pub fn error_for(&self, name: &str) -> Option<&FieldError> {
        self.field_errors.iter().find(|e| e.field() == name)
    }

    pub fn is_saving(&self) -> bool {
        self.phase == Phase::Saving
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading)
    }

    pub fn is_deleting(&self, id: &EntityId) -> bool {
        self.deleting.contains(id)
    }
}

struct EditorState {
    target: EditTarget,
    load: LoadState,
    generation: u64,
    disposed: bool,
    draft: FormDraftState,
    collection: CollectionStore,
    upload: Option<UploadStagingArea>,
    field_errors: Vec<FieldError>,
    notice: Option<Notice>,
    next_notice_id: u64,
}

impl EditorState {
    fn post_notice(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notice = Some(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    fn clear_upload(&mut self) {
        if let Some(upload) = self.upload.as_mut() {
            upload.clear();
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.disposed && self.generation == generation
    }
}

type Listener = Rc<dyn Fn(EditorSnapshot)>;

struct PreparedSave {
    request: ApiRequest,
    creating: bool,
    /// Draft as it went out; the server reply is merged over this
    sent: Entity,
}

enum Prepared {
    Send(PreparedSave),
    Skip(SkipReason),
    Invalid(EditError),
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Clone)]
pub struct ResourceEditingController {
    descriptor: Rc<ResourceDescriptor>,
    client: HttpResourceClient,
    navigator: Rc<dyn Navigator>,
    config: Rc<EditorConfig>,
    locks: OperationLocks,
    state: Rc<RefCell<EditorState>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl ResourceEditingController {
    pub fn new(
        descriptor: ResourceDescriptor,
        target: EditTarget,
        client: HttpResourceClient,
        navigator: Rc<dyn Navigator>,
        config: EditorConfig,
    ) -> Self {
        let upload = descriptor
            .image
            .map(|slot| UploadStagingArea::new(UploadPolicy::for_slot(&slot, config.max_upload_bytes)));
        let state = EditorState {
            target,
            load: LoadState::Idle,
            generation: 0,
            disposed: false,
            draft: FormDraftState::new(descriptor.schema.clone()),
            collection: CollectionStore::new(),
            upload,
            field_errors: Vec::new(),
            notice: None,
            next_notice_id: 0,
        };

        Self {
            descriptor: Rc::new(descriptor),
            client,
            navigator,
            config: Rc::new(config),
            locks: OperationLocks::new(),
            state: Rc::new(RefCell::new(state)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn target(&self) -> EditTarget {
        self.state.borrow().target.clone()
    }

    pub fn phase(&self) -> Phase {
        if self.locks.is_held(&LockTarget::Draft) {
            return Phase::Saving;
        }
        if self.locks.is_deleting() {
            return Phase::Deleting;
        }
        match self.state.borrow().load {
            LoadState::Idle => Phase::Idle,
            LoadState::Loading => Phase::Loading,
            LoadState::Loaded | LoadState::Failed => Phase::Ready,
        }
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        let phase = self.phase();
        let deleting = self.locks.deleting();
        let state = self.state.borrow();
        EditorSnapshot {
            phase,
            editable: state.load == LoadState::Loaded,
            fields: state.draft.fields().clone(),
            draft_id: state.draft.id().cloned(),
            is_new: state.draft.is_new(),
            dirty: state.draft.is_dirty(),
            field_errors: state.field_errors.clone(),
            notice: state.notice.clone(),
            items: state.collection.clone(),
            preview: state
                .upload
                .as_ref()
                .map_or_else(|| state.draft.image().cloned(), UploadStagingArea::preview),
            upload_staged: state.upload.as_ref().is_some_and(UploadStagingArea::is_staged),
            deleting,
        }
    }

    /// Called with a fresh snapshot after every state change
    pub fn subscribe(&self, listener: impl Fn(EditorSnapshot) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(snapshot.clone());
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    fn is_saving(&self) -> bool {
        self.locks.is_held(&LockTarget::Draft)
    }

    /// Drop every response still in flight; call from the page's cleanup
    pub fn dispose(&self) {
        let mut state = self.state.borrow_mut();
        state.disposed = true;
        state.generation += 1;
        log::debug!("{} editor disposed", self.descriptor.name);
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    pub async fn load(&self) -> Result<(), EditError> {
        let generation = self.begin_load();
        let result = self.fetch().await;
        self.apply(generation, result)
    }

    /// Enter `Loading`; the returned generation must be handed back to `apply`
    pub fn begin_load(&self) -> u64 {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.load = LoadState::Loading;
            state.generation
        };
        log::debug!("{}: loading (generation {})", self.descriptor.name, generation);
        self.notify();
        generation
    }

    /// Network half of a load; touches no state
    pub async fn fetch(&self) -> Result<Loaded, HttpFailure> {
        let descriptor = &*self.descriptor;
        match self.target() {
            EditTarget::New => Ok(Loaded::Blank),
            EditTarget::Collection => self.client.fetch_many(descriptor).await.map(Loaded::Many),
            EditTarget::Singleton => {
                let body = self
                    .client
                    .request(HttpMethod::Get, descriptor.path, RequestBody::Empty)
                    .await?;
                match descriptor.unwrap(body) {
                    Payload::One(value) => descriptor
                        .decode(&value)
                        .map(Loaded::One)
                        .map_err(HttpFailure::decode),
                    // nothing stored yet: start from a blank form
                    Payload::Empty => Ok(Loaded::Blank),
                    Payload::Many(values) => match values.first() {
                        Some(value) => descriptor
                            .decode(value)
                            .map(Loaded::One)
                            .map_err(HttpFailure::decode),
                        None => Ok(Loaded::Blank),
                    },
                }
            }
            EditTarget::Existing(id) => match descriptor.fetch_one {
                FetchOne::ById => {
                    let path = format!("{}/{}", descriptor.path, id);
                    self.client.fetch_one(descriptor, &path).await.map(Loaded::One)
                }
                FetchOne::FromList => {
                    let list = self.client.fetch_many(descriptor).await?;
                    list.into_iter()
                        .find(|entity| entity.id.as_ref() == Some(&id))
                        .map(Loaded::One)
                        .ok_or_else(|| {
                            HttpFailure::from_status(
                                404,
                                Some(format!("{} not found", descriptor.title)),
                            )
                        })
                }
            },
        }
    }

    /// State half of a load. Stale generations are dropped untouched.
    pub fn apply(
        &self,
        generation: u64,
        result: Result<Loaded, HttpFailure>,
    ) -> Result<(), EditError> {
        let outcome = {
            let mut state = self.state.borrow_mut();
            if !state.is_current(generation) {
                log::debug!(
                    "{}: discarding response of generation {}",
                    self.descriptor.name,
                    generation
                );
                return Ok(());
            }

            match result {
                Ok(loaded) => {
                    match loaded {
                        Loaded::Many(entities) => {
                            log::info!("{}: loaded {} items", self.descriptor.name, entities.len());
                            state.collection.load(entities);
                        }
                        Loaded::One(entity) => {
                            state.draft.load(&entity);
                            let image = entity.image.clone();
                            if let Some(upload) = state.upload.as_mut() {
                                upload.clear();
                                upload.set_persisted(image);
                            }
                        }
                        Loaded::Blank => {
                            state.draft = FormDraftState::new(self.descriptor.schema.clone());
                            if let Some(upload) = state.upload.as_mut() {
                                upload.clear();
                                upload.set_persisted(None);
                            }
                        }
                    }
                    state.load = LoadState::Loaded;
                    state.field_errors.clear();
                    if state.notice.as_ref().is_some_and(Notice::is_error) {
                        state.notice = None;
                    }
                    Ok(())
                }
                Err(failure) => {
                    log::error!("{}: load failed: {}", self.descriptor.name, failure);
                    state.load = LoadState::Failed;
                    state.post_notice(NoticeKind::Error, failure.message.clone());
                    Err(EditError::LoadFailure(failure))
                }
            }
        };
        self.notify();
        outcome
    }

    // ------------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------------

    /// Blank draft for an inline create on a list page
    pub fn begin_create(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.draft = FormDraftState::new(self.descriptor.schema.clone());
            state.field_errors.clear();
            state.notice = None;
            if let Some(upload) = state.upload.as_mut() {
                upload.clear();
                upload.set_persisted(None);
            }
        }
        self.notify();
    }

    /// Edit a member of the loaded collection without another request
    pub fn begin_edit(&self, id: &EntityId) -> bool {
        let found = {
            let mut state = self.state.borrow_mut();
            match state.collection.get(id).cloned() {
                Some(entity) => {
                    state.draft.load(&entity);
                    state.field_errors.clear();
                    state.notice = None;
                    if let Some(upload) = state.upload.as_mut() {
                        upload.clear();
                        upload.set_persisted(entity.image.clone());
                    }
                    true
                }
                None => false,
            }
        };
        if found {
            self.notify();
        } else {
            log::warn!("{}: no item {} to edit", self.descriptor.name, id);
        }
        found
    }

    pub fn set_field(&self, name: &str, value: impl Into<FieldValue>) -> Result<(), DraftError> {
        if self.is_saving() {
            return Err(DraftError::SaveInFlight);
        }
        {
            let mut state = self.state.borrow_mut();
            if state.load != LoadState::Loaded {
                return Err(DraftError::NotEditable);
            }
            state.draft.set(name, value)?;

            // inline errors go away as soon as the field is fixed
            if let Some(index) = state.field_errors.iter().position(|e| e.field() == name) {
                match state.draft.validate_field(name) {
                    Some(error) => state.field_errors[index] = error,
                    None => {
                        state.field_errors.remove(index);
                    }
                }
            }
        }
        self.notify();
        Ok(())
    }

    pub fn stage_upload(&self, file: PickedFile) -> Result<(), EditError> {
        self.stage_files(vec![file])
    }

    /// Picker and drop zone both end here; only the first file counts
    pub fn stage_files(&self, files: Vec<PickedFile>) -> Result<(), EditError> {
        if self.is_saving() {
            log::debug!("{}: file ignored, save in flight", self.descriptor.name);
            return Ok(());
        }
        let result = {
            let mut state = self.state.borrow_mut();
            let Some(slot) = self.descriptor.image else {
                log::warn!("{}: has no image slot", self.descriptor.name);
                return Ok(());
            };
            let staged = match state.upload.as_mut() {
                Some(upload) => upload.stage_first(files).map(|r| r.map(|_| ())),
                None => None,
            };
            match staged {
                None => Ok(()),
                Some(Ok(())) => {
                    state.field_errors.retain(|e| e.field() != slot.form_field);
                    if state.notice.as_ref().is_some_and(Notice::is_error) {
                        state.notice = None;
                    }
                    Ok(())
                }
                Some(Err(error)) => {
                    log::warn!("{}: upload rejected: {}", self.descriptor.name, error);
                    state.post_notice(NoticeKind::Error, error.to_string());
                    Err(EditError::UploadFailure(error))
                }
            }
        };
        self.notify();
        result
    }

    pub fn clear_upload(&self) {
        if self.is_saving() {
            return;
        }
        self.state.borrow_mut().clear_upload();
        self.notify();
    }

    // ------------------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------------------

    pub async fn submit(&self) -> Result<SaveOutcome, EditError> {
        if self.is_saving() {
            log::debug!("{}: submit ignored, save in flight", self.descriptor.name);
            return Ok(SaveOutcome::Skipped(SkipReason::InFlight));
        }
        let draft_id = self.state.borrow().draft.id().cloned();
        if let Some(id) = draft_id.filter(|id| self.locks.is_held(&LockTarget::Entity(id.clone()))) {
            log::debug!("{}: submit ignored, {} is being deleted", self.descriptor.name, id);
            return Ok(SaveOutcome::Skipped(SkipReason::InFlight));
        }

        let prepared = match self.prepare_save() {
            Prepared::Send(prepared) => prepared,
            Prepared::Skip(reason) => {
                self.notify();
                return Ok(SaveOutcome::Skipped(reason));
            }
            Prepared::Invalid(error) => {
                self.notify();
                return Err(error);
            }
        };
        let PreparedSave {
            request,
            creating,
            sent,
        } = prepared;

        let Some(guard) = self.locks.try_acquire(LockTarget::Draft) else {
            return Ok(SaveOutcome::Skipped(SkipReason::InFlight));
        };
        {
            let mut state = self.state.borrow_mut();
            if state.notice.as_ref().is_some_and(Notice::is_error) {
                state.notice = None;
            }
        }
        log::info!(
            "{}: {} {}",
            self.descriptor.name,
            request.method,
            request.path
        );
        self.notify();

        let result = self.client.send(request).await;

        if self.is_disposed() {
            log::debug!("{}: save finished after the page closed", self.descriptor.name);
            return Ok(SaveOutcome::Skipped(SkipReason::Discarded));
        }

        let outcome = match result {
            Ok(body) => {
                let saved = self.reconcile_saved(body, creating, sent);
                drop(guard);
                Ok(SaveOutcome::Saved(saved))
            }
            Err(failure) => {
                drop(guard);
                let error = if failure.is_gone() && !creating {
                    EditError::StaleEntity
                } else {
                    EditError::SaveFailure(failure)
                };
                log::warn!("{}: save failed: {}", self.descriptor.name, error);
                self.state
                    .borrow_mut()
                    .post_notice(NoticeKind::Error, error.to_string());
                Err(error)
            }
        };
        self.notify();

        if outcome.is_ok() {
            if let Some(route) = &self.config.return_route {
                self.navigator.navigate(route);
            }
        }
        outcome
    }

    /// Validation, the unchanged policy and the request to send
    fn prepare_save(&self) -> Prepared {
        let mut state = self.state.borrow_mut();
        if state.load != LoadState::Loaded {
            log::warn!("{}: submit before load", self.descriptor.name);
            return Prepared::Skip(SkipReason::NotLoaded);
        }

        let creating = !self.descriptor.is_singleton() && state.draft.is_new();
        let staged = state.upload.as_ref().and_then(|u| u.pending().cloned());

        let mut errors = state.draft.validate();
        if let Some(slot) = self.descriptor.image {
            if slot.required && creating && staged.is_none() {
                errors.push(FieldError::MissingField(slot.form_field.to_string()));
            }
        }
        if !errors.is_empty() {
            log::debug!("{}: {} invalid fields", self.descriptor.name, errors.len());
            state.field_errors = errors.clone();
            let error = EditError::ValidationFailure(errors);
            state.post_notice(NoticeKind::Error, error.to_string());
            return Prepared::Invalid(error);
        }
        state.field_errors.clear();

        if !creating && !state.draft.is_dirty() && staged.is_none() {
            match self.config.unchanged_save {
                UnchangedSavePolicy::Submit => {}
                UnchangedSavePolicy::Skip => {
                    log::debug!("{}: nothing changed, save skipped", self.descriptor.name);
                    return Prepared::Skip(SkipReason::Unchanged);
                }
                UnchangedSavePolicy::Reject => {
                    state.post_notice(NoticeKind::Error, EditError::NoChanges.to_string());
                    return Prepared::Invalid(EditError::NoChanges);
                }
            }
        }

        let entity = state.draft.to_entity();
        let (method, path, id_key) = match (creating, self.descriptor.update) {
            (true, _) => (HttpMethod::Post, self.descriptor.path.to_string(), None),
            (false, _) if self.descriptor.is_singleton() => {
                (HttpMethod::Put, self.descriptor.path.to_string(), None)
            }
            (false, UpdateRoute::ById) => {
                let id = entity.id.as_ref().map(EntityId::as_str).unwrap_or_default();
                (HttpMethod::Put, format!("{}/{}", self.descriptor.path, id), None)
            }
            (false, UpdateRoute::Shared { path, id_key }) => {
                (HttpMethod::Put, path.to_string(), Some(id_key))
            }
        };

        let body = match (staged, self.descriptor.image) {
            (Some(pending), Some(slot)) => {
                let mut form = entity
                    .fields
                    .iter()
                    .fold(MultipartForm::new(), |form, (name, value)| {
                        form.text(name.clone(), value.to_form_value())
                    });
                if let (Some(key), Some(id)) = (id_key, &entity.id) {
                    form = form.text(key, id.as_str());
                }
                RequestBody::Multipart(form.file(pending.to_part(slot.form_field)))
            }
            _ => RequestBody::Json(entity.to_json(id_key)),
        };

        Prepared::Send(PreparedSave {
            request: ApiRequest::new(method, path, body),
            creating,
            sent: entity,
        })
    }

    /// Server answer becomes the new clean state; partial answers are merged over what was sent
    fn reconcile_saved(&self, body: serde_json::Value, creating: bool, sent: Entity) -> Entity {
        let decoded = match self.descriptor.unwrap(body) {
            Payload::One(value) => self.descriptor.decode(&value).ok(),
            Payload::Many(_) | Payload::Empty => None,
        };

        let mut saved = sent;
        if let Some(server) = decoded {
            if server.id.is_some() {
                saved.id = server.id;
            }
            for (name, value) in server.fields {
                if self.descriptor.schema.contains(&name) {
                    saved.fields.insert(name, value);
                }
            }
            if server.image.is_some() {
                saved.image = server.image;
            }
        }

        let mut state = self.state.borrow_mut();
        state.draft.commit(&saved);
        if let Some(upload) = state.upload.as_mut() {
            upload.clear();
            upload.set_persisted(saved.image.clone());
        }
        if !self.descriptor.is_singleton() {
            if let Err(error) = state.collection.upsert(saved.clone()) {
                log::warn!("{}: saved item not listed: {}", self.descriptor.name, error);
            }
        }
        state.field_errors.clear();

        let verb = if creating { "created" } else { "updated" };
        log::info!("{}: {} {:?}", self.descriptor.name, verb, saved.id);
        state.post_notice(
            NoticeKind::Success,
            format!("{} {} successfully", self.descriptor.title, verb),
        );
        saved
    }

    // ------------------------------------------------------------------------
    // Deleting
    // ------------------------------------------------------------------------

    /// `Ok(None)` when the same item is already being deleted or saved
    pub async fn delete(&self, id: &EntityId) -> Result<Option<Entity>, EditError> {
        if self.is_saving() && self.state.borrow().draft.id() == Some(id) {
            log::debug!("{}: delete of {} ignored, save in flight", self.descriptor.name, id);
            return Ok(None);
        }
        let target = LockTarget::Entity(id.clone());
        let Some(guard) = self.locks.try_acquire(target) else {
            log::debug!("{}: delete of {} already in flight", self.descriptor.name, id);
            return Ok(None);
        };
        self.notify();

        let path = format!("{}/{}", self.descriptor.path, id);
        log::info!("{}: DELETE {}", self.descriptor.name, path);
        let result = self.client.send(ApiRequest::delete(path)).await;

        if self.is_disposed() {
            return Ok(None);
        }

        let outcome = {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(_) => {
                    let removed = state.collection.remove(id);
                    if state.draft.id() == Some(id) {
                        state.draft = FormDraftState::new(self.descriptor.schema.clone());
                        state.clear_upload();
                    }
                    state.post_notice(
                        NoticeKind::Success,
                        format!("{} deleted successfully", self.descriptor.title),
                    );
                    Ok(removed)
                }
                Err(failure) => {
                    let error = if failure.is_gone() {
                        EditError::StaleEntity
                    } else {
                        EditError::SaveFailure(failure)
                    };
                    log::warn!("{}: delete of {} failed: {}", self.descriptor.name, id, error);
                    state.post_notice(NoticeKind::Error, error.to_string());
                    Err(error)
                }
            }
        };
        drop(guard);
        self.notify();
        outcome
    }

    // ------------------------------------------------------------------------
    // Leaving
    // ------------------------------------------------------------------------

    /// Throw away edits and staging; no request is made. Ignored while saving.
    pub fn cancel(&self) {
        if self.is_saving() {
            log::debug!("{}: cancel ignored, save in flight", self.descriptor.name);
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.draft.reset();
            state.clear_upload();
            state.field_errors.clear();
            if state.notice.as_ref().is_some_and(Notice::is_error) {
                state.notice = None;
            }
        }
        self.notify();
        if let Some(route) = &self.config.return_route {
            self.navigator.navigate(route);
        }
    }

    pub async fn discard_and_reload(&self) -> Result<(), EditError> {
        if self.is_saving() {
            return Ok(());
        }
        {
            let mut state = self.state.borrow_mut();
            state.draft.reset();
            state.clear_upload();
            state.field_errors.clear();
        }
        self.load().await
    }

    pub fn dismiss_notice(&self) {
        self.state.borrow_mut().notice = None;
        self.notify();
    }

    /// Clears the notice only if it is still the one with `id`
    pub fn dismiss_notice_if(&self, id: u64) {
        let cleared = {
            let mut state = self.state.borrow_mut();
            if state.notice.as_ref().is_some_and(|n| n.id == id) {
                state.notice = None;
                true
            } else {
                false
            }
        };
        if cleared {
            self.notify();
        }
    }
}

/// Load several controllers concurrently and apply all results together
pub async fn load_all(controllers: &[ResourceEditingController]) -> Result<(), EditError> {
    let generations: Vec<u64> = controllers.iter().map(|c| c.begin_load()).collect();
    let results = join_all(controllers.iter().map(|c| c.fetch())).await;

    let mut first_error = None;
    for ((controller, generation), result) in controllers.iter().zip(generations).zip(results) {
        if let Err(error) = controller.apply(generation, result) {
            first_error.get_or_insert(error);
        }
    }
    first_error.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::editing::navigation::NoNavigation;
    use crate::shared::http::testing::{client_with, MockTransport};
    use contracts::domain::{a001_product, a002_event, a003_certificate, a006_rnd, a007_about};
    use crate::shared::editing::notice::NoticeExpiry;
    use serde_json::json;
    use std::cell::RefCell;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &str) {
            self.routes.borrow_mut().push(route.to_string());
        }
    }

    fn controller(
        transport: &Rc<MockTransport>,
        descriptor: ResourceDescriptor,
        target: EditTarget,
    ) -> ResourceEditingController {
        ResourceEditingController::new(
            descriptor,
            target,
            client_with(transport, Some("token-1")),
            Rc::new(NoNavigation),
            EditorConfig::default(),
        )
    }

    fn product_json() -> serde_json::Value {
        json!({"product": {
            "_id": "1",
            "name": "Anise",
            "category": "Seeds",
            "description": "Sweet seeds",
            "image": "/uploads/anise.png"
        }})
    }

    async fn loaded_product(transport: &Rc<MockTransport>) -> ResourceEditingController {
        transport.reply_json(200, product_json());
        let editor = controller(
            transport,
            a001_product::descriptor(),
            EditTarget::Existing("1".into()),
        );
        editor.load().await.unwrap();
        editor
    }

    async fn loaded_events(transport: &Rc<MockTransport>) -> ResourceEditingController {
        transport.reply_json(
            200,
            json!({"events": [
                {"_id": "4", "title": "Spring fair"},
                {"_id": "5", "title": "Herb expo"}
            ]}),
        );
        let editor = controller(transport, a002_event::descriptor(), EditTarget::Collection);
        editor.load().await.unwrap();
        editor
    }

    #[tokio::test]
    async fn test_load_existing_is_clean_and_ready() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;

        let snapshot = editor.snapshot();
        assert_eq!(snapshot.phase, Phase::Ready);
        assert!(!snapshot.dirty);
        assert_eq!(snapshot.text("name"), "Anise");
        assert_eq!(
            snapshot.preview,
            Some(ImageRef::Url("/uploads/anise.png".into()))
        );
        assert_eq!(transport.calls()[0].url, "http://api.test/api/products/1");
    }

    #[tokio::test]
    async fn test_load_failure_blocks_editing_until_retry() {
        let transport = MockTransport::new();
        transport.reply_json(500, json!({"message": "Database unavailable"}));
        let editor = controller(&transport, a001_product::descriptor(), EditTarget::Existing("1".into()));

        let error = editor.load().await.unwrap_err();
        assert!(matches!(error, EditError::LoadFailure(_)));
        assert_eq!(
            editor.snapshot().notice.map(|n| n.message),
            Some("Database unavailable".to_string())
        );
        assert_eq!(editor.set_field("name", "X"), Err(DraftError::NotEditable));

        transport.reply_json(200, product_json());
        editor.load().await.unwrap();
        assert!(editor.snapshot().notice.is_none());
        assert!(editor.set_field("name", "X").is_ok());
    }

    #[tokio::test]
    async fn test_empty_description_is_reported_without_request() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;

        editor.set_field("description", "").unwrap();
        editor.set_field("category", "").unwrap();
        let error = editor.submit().await.unwrap_err();

        assert_eq!(
            error,
            EditError::ValidationFailure(vec![FieldError::MissingField("description".into())])
        );
        assert_eq!(transport.call_count(), 1);
        assert_eq!(editor.snapshot().field_errors.len(), 1);

        // fixing the field clears its inline error
        editor.set_field("description", "Sweet seeds").unwrap();
        assert!(editor.snapshot().field_errors.is_empty());
    }

    #[tokio::test]
    async fn test_update_puts_json_and_reconciles() {
        let transport = MockTransport::new();
        let navigator = Rc::new(RecordingNavigator::default());
        transport.reply_json(200, product_json());
        let editor = ResourceEditingController::new(
            a001_product::descriptor(),
            EditTarget::Existing("1".into()),
            client_with(&transport, Some("token-1")),
            navigator.clone(),
            EditorConfig::default().returning_to("/products"),
        );
        editor.load().await.unwrap();

        editor.set_field("name", "Star anise").unwrap();
        transport.reply_json(200, json!({"message": "Product updated"}));
        let outcome = editor.submit().await.unwrap();

        let SaveOutcome::Saved(saved) = outcome else {
            panic!("expected a save");
        };
        assert_eq!(saved.text("name"), "Star anise");
        assert_eq!(saved.id, Some(EntityId::new("1")));

        let call = &transport.calls()[1];
        assert_eq!(call.method, HttpMethod::Put);
        assert_eq!(call.url, "http://api.test/api/products/1");
        assert_eq!(call.bearer.as_deref(), Some("token-1"));
        let RequestBody::Json(body) = &call.body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body["name"], "Star anise");

        let snapshot = editor.snapshot();
        assert!(!snapshot.dirty);
        assert!(snapshot.notice.unwrap().is_success());
        assert_eq!(*navigator.routes.borrow(), vec!["/products".to_string()]);
    }

    #[tokio::test]
    async fn test_save_failure_does_not_mutate() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;
        editor.set_field("name", "Star anise").unwrap();
        let before = editor.snapshot();

        transport.reply_json(500, json!({"message": "Disk full"}));
        let error = editor.submit().await.unwrap_err();

        assert_eq!(
            error,
            EditError::SaveFailure(HttpFailure::from_status(500, Some("Disk full".into())))
        );
        let after = editor.snapshot();
        assert_eq!(after.phase, Phase::Ready);
        assert_eq!(after.fields, before.fields);
        assert!(after.dirty);
        assert_eq!(after.notice.map(|n| n.message), Some("Disk full".to_string()));
    }

    #[tokio::test]
    async fn test_network_failure_uses_generic_message() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;
        editor.set_field("name", "Star anise").unwrap();

        transport.fail_network();
        let error = editor.submit().await.unwrap_err();
        assert_eq!(
            error.to_string(),
            crate::shared::http::GENERIC_FAILURE_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_double_submit_sends_once() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;
        editor.set_field("name", "Star anise").unwrap();
        transport.reply_json(200, json!({"product": {"_id": "1", "name": "Star anise"}}));

        let (first, second) = tokio::join!(editor.submit(), editor.submit());

        assert!(matches!(first, Ok(SaveOutcome::Saved(_))));
        assert_eq!(second, Ok(SaveOutcome::Skipped(SkipReason::InFlight)));
        assert_eq!(transport.call_count(), 2);
        assert_eq!(editor.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_phase_is_saving_while_in_flight() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;
        editor.set_field("name", "Star anise").unwrap();
        transport.reply_json(200, json!({}));

        let observed = RefCell::new(None);
        // polled right after submit suspends on the network
        let watch = async {
            *observed.borrow_mut() = Some(editor.phase());
        };
        let (result, ()) = tokio::join!(editor.submit(), watch);

        assert!(result.is_ok());
        assert_eq!(*observed.borrow(), Some(Phase::Saving));
    }

    #[tokio::test]
    async fn test_add_certificate_with_image() {
        let transport = MockTransport::new();
        let editor = controller(&transport, a003_certificate::descriptor(), EditTarget::New);
        editor.load().await.unwrap();
        assert_eq!(transport.call_count(), 0);

        editor.set_field("certificateBody", "ISO 22000").unwrap();
        editor.set_field("certificateNumber", "EG-1234").unwrap();
        editor.set_field("expiryDate", "2027-06-30").unwrap();
        editor
            .stage_upload(PickedFile::new("iso.jpg", "image/jpeg", vec![0xff; 1024 * 1024]))
            .unwrap();
        assert!(editor.snapshot().preview.unwrap().is_pending());

        transport.reply_json(
            201,
            json!({"certificate": {
                "_id": "9",
                "certificateBody": "ISO 22000",
                "certificateNumber": "EG-1234",
                "expiryDate": "2027-06-30",
                "image": "/uploads/iso.jpg"
            }}),
        );
        editor.submit().await.unwrap();

        let call = &transport.calls()[0];
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.url, "http://api.test/api/certificates");
        let RequestBody::Multipart(form) = &call.body else {
            panic!("expected multipart");
        };
        assert_eq!(form.field("certificateNumber"), Some("EG-1234"));
        assert_eq!(form.files[0].field, "image");
        assert_eq!(form.files[0].bytes.len(), 1024 * 1024);

        let snapshot = editor.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert!(snapshot.items.contains(&"9".into()));
        assert!(!snapshot.upload_staged);
        assert_eq!(
            snapshot.preview,
            Some(ImageRef::Url("/uploads/iso.jpg".into()))
        );
        assert_eq!(
            snapshot.notice.map(|n| n.message),
            Some("Certificate created successfully".to_string())
        );
    }

    #[tokio::test]
    async fn test_required_image_on_create() {
        let transport = MockTransport::new();
        let editor = controller(
            &transport,
            contracts::domain::a004_gallery_item::descriptor(),
            EditTarget::New,
        );
        editor.load().await.unwrap();
        editor.set_field("title", "Harvest").unwrap();

        let error = editor.submit().await.unwrap_err();
        assert_eq!(
            error.field_errors(),
            &[FieldError::MissingField("image".into())]
        );

        editor
            .stage_upload(PickedFile::new("field.mp4", "video/mp4", vec![1, 2]))
            .unwrap();
        assert!(editor.snapshot().field_errors.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_upload_is_reported() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;

        let error = editor
            .stage_upload(PickedFile::new("notes.txt", "text/plain", vec![1]))
            .unwrap_err();
        assert!(matches!(error, EditError::UploadFailure(_)));
        let snapshot = editor.snapshot();
        assert!(!snapshot.upload_staged);
        assert!(snapshot.notice.unwrap().is_error());
    }

    #[tokio::test]
    async fn test_unchanged_policies() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;
        assert_eq!(
            editor.submit().await,
            Ok(SaveOutcome::Skipped(SkipReason::Unchanged))
        );
        assert_eq!(transport.call_count(), 1);

        for (policy, expect_call) in [
            (UnchangedSavePolicy::Reject, false),
            (UnchangedSavePolicy::Submit, true),
        ] {
            let transport = MockTransport::new();
            transport.reply_json(200, product_json());
            let editor = ResourceEditingController::new(
                a001_product::descriptor(),
                EditTarget::Existing("1".into()),
                client_with(&transport, Some("t")),
                Rc::new(NoNavigation),
                EditorConfig::default().with_policy(policy),
            );
            editor.load().await.unwrap();
            transport.reply_json(200, json!({}));

            let result = editor.submit().await;
            assert_eq!(transport.call_count() == 2, expect_call, "{policy:?}");
            if !expect_call {
                assert_eq!(result, Err(EditError::NoChanges));
            }
        }
    }

    #[tokio::test]
    async fn test_save_of_vanished_entity_is_stale() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;
        editor.set_field("name", "Star anise").unwrap();

        transport.reply_json(404, json!({"message": "Not found"}));
        assert_eq!(editor.submit().await, Err(EditError::StaleEntity));
        // no recreation attempt
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_item() {
        let transport = MockTransport::new();
        let editor = loaded_events(&transport).await;

        transport.fail_network();
        let error = editor.delete(&"5".into()).await.unwrap_err();

        assert!(matches!(error, EditError::SaveFailure(_)));
        let snapshot = editor.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert!(snapshot.items.iter().any(|e| e.id == Some(EntityId::new("5"))));
        assert!(snapshot.deleting.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_after_success() {
        let transport = MockTransport::new();
        let editor = loaded_events(&transport).await;

        transport.reply_json(200, json!({"message": "deleted"}));
        let id = EntityId::new("5");
        let (first, second) = tokio::join!(editor.delete(&id), editor.delete(&id));

        assert!(first.unwrap().is_some());
        assert_eq!(second, Ok(None));
        assert_eq!(transport.calls()[1].method, HttpMethod::Delete);
        assert_eq!(transport.calls()[1].url, "http://api.test/api/events/5");
        assert_eq!(editor.snapshot().items.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_of_vanished_entity_leaves_collection() {
        let transport = MockTransport::new();
        let editor = loaded_events(&transport).await;

        transport.reply_json(410, json!({}));
        assert_eq!(editor.delete(&"4".into()).await, Err(EditError::StaleEntity));
        assert_eq!(editor.snapshot().items.len(), 2);
    }

    #[tokio::test]
    async fn test_cancel_resets_without_network() {
        let transport = MockTransport::new();
        let editor = loaded_product(&transport).await;
        editor.set_field("name", "Star anise").unwrap();
        editor
            .stage_upload(PickedFile::new("b.png", "image/png", vec![1]))
            .unwrap();

        editor.cancel();

        let snapshot = editor.snapshot();
        assert!(!snapshot.dirty);
        assert_eq!(snapshot.text("name"), "Anise");
        assert!(!snapshot.upload_staged);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"events": [{"_id": "1", "title": "Old"}]}));
        transport.reply_json(200, json!({"events": [{"_id": "2", "title": "New"}]}));
        let editor = controller(&transport, a002_event::descriptor(), EditTarget::Collection);

        let (first, second) = tokio::join!(editor.load(), editor.load());
        assert!(first.is_ok() && second.is_ok());

        let items = editor.snapshot().items.to_vec();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text("title"), "New");
    }

    #[tokio::test]
    async fn test_response_after_dispose_is_dropped() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"events": [{"_id": "1", "title": "Expo"}]}));
        let editor = controller(&transport, a002_event::descriptor(), EditTarget::Collection);

        let close = async { editor.dispose() };
        let (result, ()) = tokio::join!(editor.load(), close);

        assert!(result.is_ok());
        assert!(editor.is_disposed());
        assert!(editor.snapshot().items.is_empty());
    }

    #[tokio::test]
    async fn test_load_all_applies_page_and_sections() {
        let transport = MockTransport::new();
        transport.reply_json_for(
            "/api/about-us/page",
            200,
            json!({"pageTitle": "About Salvia", "intro": "Since 1998"}),
        );
        transport.reply_json_for(
            "/api/about-us/sections",
            200,
            json!({"sections": [{"_id": "s1", "name": "Mission", "details": "Grow"}]}),
        );
        let page = controller(&transport, a007_about::page_descriptor(), EditTarget::Singleton);
        let sections = controller(&transport, a007_about::section_descriptor(), EditTarget::Collection);

        load_all(&[page.clone(), sections.clone()]).await.unwrap();

        assert_eq!(page.snapshot().text("pageTitle"), "About Salvia");
        assert_eq!(sections.snapshot().items.len(), 1);
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_section_update_uses_shared_route() {
        let transport = MockTransport::new();
        transport.reply_json(
            200,
            json!({"sections": [
                {"_id": "a", "name": "Lab", "details": "Extraction"},
                {"_id": "b", "name": "Field", "details": "Trials"}
            ]}),
        );
        let editor = controller(
            &transport,
            a006_rnd::section_descriptor(),
            EditTarget::Existing("b".into()),
        );
        editor.load().await.unwrap();
        assert_eq!(editor.snapshot().text("name"), "Field");

        editor.set_field("details", "Field trials").unwrap();
        transport.reply_json(200, json!({"message": "ok"}));
        editor.submit().await.unwrap();

        let call = &transport.calls()[1];
        assert_eq!(call.url, "http://api.test/api/rnd/section");
        let RequestBody::Json(body) = &call.body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body["sectionId"], "b");
        assert_eq!(body["details"], "Field trials");
    }

    #[tokio::test]
    async fn test_inline_edit_on_list_page() {
        let transport = MockTransport::new();
        let editor = loaded_events(&transport).await;

        assert!(editor.begin_edit(&"4".into()));
        editor.set_field("title", "Spring herb fair").unwrap();
        editor.set_field("date", "2026-04-12").unwrap();
        editor.set_field("location", "Cairo").unwrap();
        editor.set_field("description", "Open day").unwrap();
        transport.reply_json(200, json!({}));
        editor.submit().await.unwrap();

        let snapshot = editor.snapshot();
        assert_eq!(snapshot.items.position(&"4".into()), Some(0));
        assert_eq!(snapshot.items.to_vec()[0].text("title"), "Spring herb fair");
        assert_eq!(snapshot.items.len(), 2);

        editor.begin_create();
        assert!(editor.snapshot().is_new);
        assert!(!editor.begin_edit(&"404".into()));
    }

    #[tokio::test]
    async fn test_mutation_without_session_reports_unauthorized() {
        let transport = MockTransport::new();
        transport.reply_json(200, product_json());
        let editor = ResourceEditingController::new(
            a001_product::descriptor(),
            EditTarget::Existing("1".into()),
            client_with(&transport, None),
            Rc::new(NoNavigation),
            EditorConfig::default(),
        );
        editor.load().await.unwrap();
        editor.set_field("name", "Star anise").unwrap();

        let error = editor.submit().await.unwrap_err();
        assert!(matches!(error, EditError::SaveFailure(ref f) if f.is_unauthorized()));
        assert_eq!(transport.call_count(), 1);
    }

    fn edit_event(editor: &ResourceEditingController, id: &str, title: &str) {
        assert!(editor.begin_edit(&id.into()));
        editor.set_field("title", title).unwrap();
        editor.set_field("date", "2026-04-12").unwrap();
        editor.set_field("location", "Cairo").unwrap();
        editor.set_field("description", "Open day").unwrap();
    }

    #[tokio::test]
    async fn test_edits_during_save_are_refused() {
        let transport = MockTransport::new();
        let editor = loaded_events(&transport).await;
        edit_event(&editor, "4", "Renamed fair");
        transport.reply_json(200, json!({"message": "Event updated"}));

        let interfere = async {
            editor.cancel();
            editor.set_field("title", "Autumn fair")
        };
        let (saved, edit) = tokio::join!(editor.submit(), interfere);

        assert!(matches!(saved, Ok(SaveOutcome::Saved(_))));
        assert_eq!(edit, Err(DraftError::SaveInFlight));

        let RequestBody::Json(body) = &transport.calls()[1].body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body["title"], "Renamed fair");

        let snapshot = editor.snapshot();
        assert!(!snapshot.dirty);
        assert_eq!(snapshot.text("title"), "Renamed fair");
        assert_eq!(
            snapshot.items.get(&"4".into()).map(|e| e.text("title")),
            Some("Renamed fair")
        );
    }

    #[tokio::test]
    async fn test_collection_follows_sent_entity_not_later_draft() {
        let transport = MockTransport::new();
        let editor = loaded_events(&transport).await;
        edit_event(&editor, "5", "Herb expo 2026");
        transport.reply_json(200, json!({}));

        let (saved, ()) = tokio::join!(editor.submit(), async { editor.cancel() });

        let SaveOutcome::Saved(saved) = saved.unwrap() else {
            panic!("expected a save");
        };
        assert_eq!(saved.text("title"), "Herb expo 2026");
        assert_eq!(editor.snapshot().items.get(&"5".into()), Some(&saved));
    }

    #[tokio::test]
    async fn test_submit_while_deleting_same_item_is_skipped() {
        let transport = MockTransport::new();
        let editor = loaded_events(&transport).await;
        edit_event(&editor, "5", "Herb expo 2026");
        transport.reply_json(200, json!({"message": "deleted"}));

        let id = EntityId::new("5");
        let (deleted, submitted) = tokio::join!(editor.delete(&id), editor.submit());

        assert!(deleted.unwrap().is_some());
        assert_eq!(submitted, Ok(SaveOutcome::Skipped(SkipReason::InFlight)));
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].method, HttpMethod::Delete);
        assert!(!editor.snapshot().items.contains(&id));
    }

    #[tokio::test]
    async fn test_delete_while_saving_same_item_is_skipped() {
        let transport = MockTransport::new();
        let editor = loaded_events(&transport).await;
        edit_event(&editor, "5", "Herb expo 2026");
        transport.reply_json(200, json!({}));
        transport.reply_json(200, json!({"message": "deleted"}));

        let (same, other) = (EntityId::new("5"), EntityId::new("4"));
        let (submitted, same_delete, other_delete) = tokio::join!(
            editor.submit(),
            editor.delete(&same),
            editor.delete(&other)
        );

        assert!(matches!(submitted, Ok(SaveOutcome::Saved(_))));
        assert_eq!(same_delete, Ok(None));
        assert!(other_delete.unwrap().is_some());

        let methods: Vec<_> = transport.calls().iter().map(|c| (c.method, c.url.clone())).collect();
        assert_eq!(
            methods[1..],
            [
                (HttpMethod::Put, "http://api.test/api/events/5".to_string()),
                (HttpMethod::Delete, "http://api.test/api/events/4".to_string()),
            ]
        );
        let items = editor.snapshot().items;
        assert_eq!(items.len(), 1);
        assert!(items.contains(&same));
    }

    #[tokio::test]
    async fn test_success_notice_expires_without_touching_newer_notice() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let transport = MockTransport::new();
                let editor = loaded_product(&transport).await;

                let timers = Rc::new(RefCell::new(Vec::new()));
                let expiry = NoticeExpiry::default();
                let owner = editor.clone();
                let started = timers.clone();
                editor.subscribe(move |snapshot| {
                    if let Some(id) = expiry.needs_timer(snapshot.notice.as_ref()) {
                        started.borrow_mut().push(id);
                        let owner = owner.clone();
                        tokio::task::spawn_local(async move {
                            tokio::time::sleep(Duration::from_millis(20)).await;
                            owner.dismiss_notice_if(id);
                        });
                    }
                });

                editor.set_field("name", "Star anise").unwrap();
                transport.reply_json(200, json!({}));
                editor.submit().await.unwrap();
                assert!(editor.snapshot().notice.unwrap().is_success());

                // later transitions keep the one timer
                editor.set_field("name", "Green anise").unwrap();
                assert_eq!(timers.borrow().len(), 1);

                // an error arrives before the success timer fires
                transport.reply_json(500, json!({"message": "Disk full"}));
                editor.submit().await.unwrap_err();
                tokio::time::sleep(Duration::from_millis(60)).await;
                assert_eq!(
                    editor.snapshot().notice.map(|n| n.message),
                    Some("Disk full".to_string())
                );

                transport.reply_json(200, json!({}));
                editor.submit().await.unwrap();
                assert_eq!(timers.borrow().len(), 2);
                tokio::time::sleep(Duration::from_millis(60)).await;
                assert!(editor.snapshot().notice.is_none());
            })
            .await;
    }

    #[test]
    fn test_dismiss_notice_if_only_clears_matching() {
        let transport = MockTransport::new();
        let editor = controller(&transport, a001_product::descriptor(), EditTarget::New);
        let id = editor
            .state
            .borrow_mut()
            .post_notice(NoticeKind::Success, "Saved");

        editor.dismiss_notice_if(id + 1);
        assert!(editor.snapshot().notice.is_some());
        editor.dismiss_notice_if(id);
        assert!(editor.snapshot().notice.is_none());
    }
}
