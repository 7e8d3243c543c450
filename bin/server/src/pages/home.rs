//! Home page component.

use leptos::prelude::*;

/// The home page: hero banner, feature highlights, and a closing
/// call to action. All content is static.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Yapay Zeka Akademisi'ne Hoş Geldiniz"</h1>
                <p>
                    "Geleceğin teknolojisini bugünden öğrenin. Yapay zeka ve makine \
                     öğrenmesi alanında uzmanlaşın."
                </p>
                <a href="/courses" class="cta-button">"Kursları Keşfet"</a>
            </section>

            <section class="features">
                <div class="feature-card">
                    <h3>"Uzman Eğitmenler"</h3>
                    <p>"Alanında uzman eğitmenlerimizle birebir eğitim fırsatı yakalayın."</p>
                </div>
                <div class="feature-card">
                    <h3>"Pratik Odaklı"</h3>
                    <p>"Gerçek dünya projeleriyle pratik yaparak öğrenin."</p>
                </div>
                <div class="feature-card">
                    <h3>"Sertifika"</h3>
                    <p>"Başarıyla tamamladığınız kurslar için sertifika alın."</p>
                </div>
            </section>

            <section class="cta-section">
                <h2>"Hemen Başlayın"</h2>
                <p>
                    "Yapay zeka yolculuğunuza bugün başlayın ve geleceğin teknolojisinde \
                     öncü olun."
                </p>
                <a href="/contact" class="cta-button">"Bize Ulaşın"</a>
            </section>
        </div>
    }
}
