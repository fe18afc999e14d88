//! Fixed sidebar: one entry per editable page of the site, plus logout

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    route: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Nested routes (add/edit/preview) that keep this item highlighted
    nested: &'static [&'static str],
}

const MENU: &[MenuItem] = &[
    MenuItem { route: "/", label: "Home", icon: "home", nested: &[] },
    MenuItem { route: "/about", label: "About Us", icon: "about", nested: &["/preview/"] },
    MenuItem {
        route: "/products",
        label: "Our Products",
        icon: "products",
        nested: &["/add-product", "/edit-product/"],
    },
    MenuItem {
        route: "/our-quality",
        label: "Our Quality Co.",
        icon: "quality",
        nested: &["/quality-preview/"],
    },
    MenuItem { route: "/r-and-d", label: "R&D", icon: "rnd", nested: &["/r-and-d-preview/"] },
    MenuItem { route: "/gallary", label: "Gallery", icon: "gallery", nested: &[] },
    MenuItem {
        route: "/events",
        label: "Events",
        icon: "events",
        nested: &["/add-event", "/edit-event/"],
    },
    MenuItem { route: "/contact-us", label: "Contact Us", icon: "contact", nested: &[] },
    MenuItem {
        route: "/certificates",
        label: "Certificates",
        icon: "certificates",
        nested: &["/add-certificate", "/edit-certificate/"],
    },
    MenuItem { route: "/page10", label: "Showcase", icon: "showcase", nested: &[] },
];

impl MenuItem {
    fn is_active(&self, path: &str) -> bool {
        path == self.route || self.nested.iter().any(|prefix| path.starts_with(prefix))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth_state = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(auth_state);
        navigate("/login", Default::default());
    };

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__brand">"Salvia Naturals"</div>
            {MENU.iter().map(|item| {
                let item = *item;
                view! {
                    <a
                        href=item.route
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || location.pathname.with(|path| item.is_active(path))
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </a>
                }
            }).collect_view()}
            <button class="app-sidebar__item app-sidebar__logout" on:click=logout>
                <div class="app-sidebar__item-content">
                    {icon("logout")}
                    <span>"Logout"</span>
                </div>
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_routes_highlight_parent() {
        let products = MENU.iter().find(|m| m.route == "/products").unwrap();
        assert!(products.is_active("/edit-product/42"));
        assert!(products.is_active("/add-product"));
        assert!(!products.is_active("/events"));

        let home = MENU[0];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
    }
}
