//! Main Leptos application component and routing.

use crate::pages::{
    AboutPage, AiPresentationPage, ContactPage, CourseDetailPage, CoursesPage, HomePage,
    NotFoundPage,
};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Yapay Zeka Akademisi"/>
        <Router>
            <Navbar/>
            <main class="container">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/courses") view=CoursesPage/>
                    <Route path=path!("/courses/:id") view=CourseDetailPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/ai-presentation") view=AiPresentationPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Top navigation bar, shown on every page.
///
/// The hamburger icon is presentational only; the link list is always in
/// the DOM and layout is handled by the stylesheet.
#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <a href="/">"Yapay Zeka Akademisi"</a>
            </div>
            <div class="menu-icon">
                <span></span>
                <span></span>
                <span></span>
            </div>
            <ul class="nav-links">
                <li><a href="/">"Ana Sayfa"</a></li>
                <li><a href="/courses">"Kurslar"</a></li>
                <li><a href="/ai-presentation">"AI Asistan"</a></li>
                <li><a href="/about">"Hakkımızda"</a></li>
                <li><a href="/contact">"İletişim"</a></li>
            </ul>
        </nav>
    }
}
