//! Contact page component.

use leptos::prelude::*;

/// The contact page. All content is static.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"İletişim"</h1>
            <p class="contact-intro">"Sorularınız için bize ulaşın."</p>

            <div class="contact-grid">
                <div class="contact-card">
                    <h3>"E-posta"</h3>
                    <p>"info@yzakademi.dev"</p>
                </div>
                <div class="contact-card">
                    <h3>"Telefon"</h3>
                    <p>"+90 (212) 555 00 00"</p>
                    <p>"Hafta içi 09:00 - 18:00"</p>
                </div>
                <div class="contact-card">
                    <h3>"Adres"</h3>
                    <p>"Teknoloji Mahallesi, Yazılım Caddesi No: 42"</p>
                    <p>"Şişli / İstanbul"</p>
                </div>
            </div>
        </div>
    }
}
