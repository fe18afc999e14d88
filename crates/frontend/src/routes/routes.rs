use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_product::ui::{details::ProductDetails, list::ProductList};
use crate::domain::a002_event::ui::{details::EventDetails, list::EventList};
use crate::domain::a003_certificate::ui::{details::CertificateDetails, list::CertificateList};
use crate::domain::a004_gallery_item::ui::list::GalleryPage;
use crate::domain::a005_quality_section::ui::{details::QualitySectionPreview, list::QualityPage};
use crate::domain::a006_rnd::ui::{details::RndSectionPreview, page::RndPage};
use crate::domain::a007_about::ui::{details::AboutSectionPreview, page::AboutPage};
use crate::domain::a008_contact_info::ui::page::ContactPage;
use crate::domain::a009_showcase::ui::page::ShowcasePage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;

/// Everything except `/login` sits behind the auth guard
#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page__placeholder">"Page not found."</div> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=ProtectedLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("about") view=AboutPage />
                    <Route path=path!("preview/:id") view=AboutSectionPreview />
                    <Route path=path!("products") view=ProductList />
                    <Route path=path!("add-product") view=ProductDetails />
                    <Route path=path!("edit-product/:id") view=ProductDetails />
                    <Route path=path!("our-quality") view=QualityPage />
                    <Route path=path!("quality-preview/:id") view=QualitySectionPreview />
                    <Route path=path!("r-and-d") view=RndPage />
                    <Route path=path!("r-and-d-preview/:id") view=RndSectionPreview />
                    <Route path=path!("gallary") view=GalleryPage />
                    <Route path=path!("events") view=EventList />
                    <Route path=path!("add-event") view=EventDetails />
                    <Route path=path!("edit-event/:id") view=EventDetails />
                    <Route path=path!("contact-us") view=ContactPage />
                    <Route path=path!("certificates") view=CertificateList />
                    <Route path=path!("add-certificate") view=CertificateDetails />
                    <Route path=path!("edit-certificate/:id") view=CertificateDetails />
                    <Route path=path!("page10") view=ShowcasePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
