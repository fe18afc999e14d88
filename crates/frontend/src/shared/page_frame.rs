//! PageFrame: standard root wrapper for every admin page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{resource}--{category}"`, e.g. `"a001_product--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants
//!
//! The `--` separator makes the resource searchable: copy the id from the
//! DOM inspector and it leads to `domain/a001_product/`.

use leptos::prelude::*;

/// Card grid of collection records
pub const PAGE_CAT_LIST: &str = "list";

/// Add / edit form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Form over a singleton resource, optionally with its sections
pub const PAGE_CAT_SINGLETON: &str = "singleton";

/// Read-only page
pub const PAGE_CAT_PREVIEW: &str = "preview";

/// Login, home
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `list`      → `page`
/// - `detail`    → `page page--detail`
/// - `singleton` → `page page--detail`
/// - `preview`   → `page page--preview`
/// - `system`    → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{resource}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL | PAGE_CAT_SINGLETON => "page page--detail",
        PAGE_CAT_PREVIEW => "page page--preview",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
