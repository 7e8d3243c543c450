//! About page component.

use leptos::prelude::*;

/// The about page. All content is static.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"Hakkımızda"</h1>

            <section class="about-section">
                <h2>"Vizyonumuz"</h2>
                <p>
                    "Yapay Zeka Akademisi olarak amacımız, geleceğin teknolojisini \
                     bugünden öğrenmek isteyen herkese kaliteli ve kapsamlı eğitim \
                     imkanı sunmaktır. Öğrencilerimizin yapay zeka ve makine öğrenmesi \
                     alanında uzmanlaşmalarını sağlayarak, teknoloji dünyasında öncü \
                     olmalarını hedefliyoruz."
                </p>
            </section>

            <section class="about-section">
                <h2>"Misyonumuz"</h2>
                <p>
                    "Pratik odaklı eğitim yaklaşımımız ve alanında uzman \
                     eğitmenlerimizle, öğrencilerimize en güncel teknolojileri ve \
                     metodları öğretiyoruz. Her öğrencinin kendi hızında \
                     ilerleyebileceği, interaktif ve destekleyici bir öğrenme ortamı \
                     sunuyoruz."
                </p>
            </section>

            <section class="about-section">
                <h2>"Değerlerimiz"</h2>
                <div class="values-grid">
                    <div class="value-card">
                        <h3>"Kalite"</h3>
                        <p>
                            "En yüksek eğitim standartlarını koruyarak, öğrencilerimize \
                             en iyi eğitimi sunuyoruz."
                        </p>
                    </div>
                    <div class="value-card">
                        <h3>"Yenilikçilik"</h3>
                        <p>
                            "Sürekli gelişen teknoloji dünyasında en güncel bilgileri \
                             öğrencilerimize aktarıyoruz."
                        </p>
                    </div>
                    <div class="value-card">
                        <h3>"Destek"</h3>
                        <p>
                            "Öğrencilerimizin başarısı için sürekli destek ve rehberlik \
                             sağlıyoruz."
                        </p>
                    </div>
                    <div class="value-card">
                        <h3>"Topluluk"</h3>
                        <p>
                            "Güçlü bir öğrenci topluluğu oluşturarak, sürekli öğrenme ve \
                             gelişme ortamı sağlıyoruz."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
