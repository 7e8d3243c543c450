//! Fallback page for unknown routes.

use leptos::prelude::*;

/// Rendered by the router when no route matches.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Sayfa bulunamadı"</h1>
            <a href="/">"Ana Sayfaya Dön"</a>
        </div>
    }
}
