use leptos::prelude::*;

use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

const TILES: &[(&str, &str, &str, &str)] = &[
    ("/about", "About Us", "about", "Page intro and content blocks"),
    ("/products", "Our Products", "products", "Catalogue of seeds, leaves and flowers"),
    ("/our-quality", "Our Quality Commitment", "quality", "Quality sections"),
    ("/r-and-d", "R&D", "rnd", "Research page intro and sections"),
    ("/gallary", "Gallery", "gallery", "Images and videos"),
    ("/events", "Events", "events", "Exhibitions and fairs"),
    ("/contact-us", "Contact Us", "contact", "Address, phone and e-mail"),
    ("/certificates", "Certificates", "certificates", "Quality certificates"),
    ("/page10", "Showcase", "showcase", "Showcase page"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Welcome to the Salvia Naturals admin" subtitle="Choose a page of the site to edit" />
            <div class="page__content">
                <div class="card-grid">
                    {TILES.iter().map(|(route, title, icon_name, hint)| view! {
                        <a class="home-tile" href=*route>
                            <div class="home-tile__icon">{icon(icon_name)}</div>
                            <div class="home-tile__title">{*title}</div>
                            <div class="home-tile__hint">{*hint}</div>
                        </a>
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
