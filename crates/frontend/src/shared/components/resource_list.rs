use contracts::shared::{Entity, EntityId, ResourceDescriptor};
use leptos::prelude::*;
use thaw::*;

use super::notice_banner::{LoadGate, NoticeBanner};
use super::page_header::PageHeader;
use super::upload_dropzone::MediaPreview;
use crate::shared::editing::{EditTarget, EditorViewModel};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const EXCERPT_CHARS: usize = 160;

/// Which fields a record card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFields {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub body: Option<&'static str>,
}

impl CardFields {
    pub const fn titled(title: &'static str) -> Self {
        Self {
            title,
            subtitle: None,
            body: None,
        }
    }

    pub const fn with_subtitle(mut self, field: &'static str) -> Self {
        self.subtitle = Some(field);
        self
    }

    pub const fn with_body(mut self, field: &'static str) -> Self {
        self.body = Some(field);
        self
    }
}

pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Whole list page: header, optional search box, card grid
#[component]
pub fn ResourceListPage(
    descriptor: ResourceDescriptor,
    page_id: &'static str,
    #[prop(into)]
    heading: String,
    card: CardFields,
    /// Route of the create form
    #[prop(optional)]
    add_route: Option<&'static str>,
    /// Edit links go to `{edit_route}/{id}`
    edit_route: &'static str,
    #[prop(optional)]
    searchable: bool,
) -> impl IntoView {
    let vm = EditorViewModel::for_page(descriptor.clone(), EditTarget::Collection, None);
    vm.load();

    let title = descriptor.title;
    let (query, set_query) = signal(String::new());

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader title=heading>
                {searchable.then(|| view! {
                    <SearchInput
                        value=query
                        on_change=Callback::new(move |q: String| set_query.set(q))
                        placeholder=format!("Search {}...", descriptor.name)
                    />
                })}
                {add_route.map(|route| view! {
                    <a href=route class="button button--primary">
                        {icon("plus")}
                        {format!("Add {}", title)}
                    </a>
                })}
            </PageHeader>
            <NoticeBanner vm=vm />
            <div class="page__content">
                <CollectionGrid
                    vm=vm
                    descriptor=descriptor.clone()
                    card=card
                    edit_route=edit_route
                    query=query
                />
            </div>
        </PageFrame>
    }
}

/// Card grid over a loaded collection, with a confirmation before delete
#[component]
pub fn CollectionGrid(
    vm: EditorViewModel,
    descriptor: ResourceDescriptor,
    card: CardFields,
    edit_route: &'static str,
    #[prop(optional, into)]
    query: Signal<String>,
) -> impl IntoView {
    let (pending_delete, set_pending_delete) = signal(None::<Entity>);
    let search_fields: Vec<&'static str> = descriptor.schema.searchable().collect();
    let shows_media = descriptor.image.is_some();
    let title = descriptor.title;

    let visible = Memo::new(move |_| {
        let q = query.get();
        vm.state.with(|s| {
            s.items
                .search(&q, &search_fields)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let confirm_delete = Callback::new(move |_| {
        if let Some(entity) = pending_delete.get_untracked() {
            if let Some(id) = entity.id {
                vm.delete(id);
            }
        }
        set_pending_delete.set(None);
    });

    view! {
        <LoadGate vm=vm>
            {move || {
                let items = visible.get();
                if items.is_empty() {
                    let message = if query.with(|q| q.trim().is_empty()) {
                        "Nothing here yet."
                    } else {
                        "No matches."
                    };
                    return view! { <div class="page__placeholder">{message}</div> }.into_any();
                }
                let q = query.get();
                view! {
                    <div class="card-grid">
                        {items
                            .into_iter()
                            .map(|entity| view! {
                                <RecordCard
                                    vm=vm
                                    entity=entity
                                    card=card
                                    edit_route=edit_route
                                    query=q.clone()
                                    shows_media=shows_media
                                    on_delete=Callback::new(move |e: Entity| set_pending_delete.set(Some(e)))
                                />
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </LoadGate>
        {move || pending_delete.get().map(|entity| {
            let label = entity.text(card.title).to_string();
            view! {
                <ConfirmDialog
                    title=format!("Delete {}", title)
                    message=format!("Are you sure you want to delete \"{}\"? This cannot be undone.", label)
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                />
            }
        })}
    }
}

#[component]
fn RecordCard(
    vm: EditorViewModel,
    entity: Entity,
    card: CardFields,
    edit_route: &'static str,
    query: String,
    shows_media: bool,
    on_delete: Callback<Entity>,
) -> impl IntoView {
    let id = entity.id.clone().unwrap_or_else(|| EntityId::new(""));
    let href = format!("{}/{}", edit_route, id);
    let deleting_id = id.clone();
    let deleting = Signal::derive(move || vm.state.with(|s| s.is_deleting(&deleting_id)));

    let title = highlight_matches(entity.text(card.title), &query);
    let subtitle = card
        .subtitle
        .map(|field| view! { <div class="record-card__subtitle">{entity.text(field).to_string()}</div> });
    let body = card.body.map(|field| {
        let text = excerpt(entity.text(field), EXCERPT_CHARS);
        view! { <p class="record-card__body">{highlight_matches(&text, &query)}</p> }
    });
    let media = shows_media
        .then(|| entity.image.clone())
        .flatten()
        .map(|image| view! { <MediaPreview image=image alt=entity.text(card.title).to_string() /> });

    view! {
        <Card attr:class="record-card">
            {media}
            <div class="record-card__content">
                <h3 class="record-card__title">{title}</h3>
                {subtitle}
                {body}
            </div>
            <Flex attr:class="record-card__actions" justify=FlexJustify::End>
                <a href=href class="button button--secondary button--small">
                    {icon("edit")}
                    "Edit"
                </a>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    disabled=deleting
                    on_click=move |_| on_delete.run(entity.clone())
                >
                    {icon("delete")}
                    {move || if deleting.get() { " Deleting..." } else { " Delete" }}
                </Button>
            </Flex>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_cuts_on_char_boundary() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("Ромашка аптечная", 7), "Ромашка…");
    }
}
