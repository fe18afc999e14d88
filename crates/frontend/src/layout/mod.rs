pub mod left;

use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |   Content (matched route)    |
/// |  (Left)   |                              |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <div data-zone="left" class="left">
                    <left::sidebar::Sidebar />
                </div>
                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}
