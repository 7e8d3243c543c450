//! Course listing page and its server function.

use leptos::prelude::*;

/// Course info for a listing card.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CourseCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: String,
    pub image: String,
}

/// Server function to list all courses.
#[server]
pub async fn list_courses() -> Result<Vec<CourseCard>, ServerFnError> {
    use crate::server_helpers;

    let catalog = server_helpers::catalog().await?;

    Ok(catalog
        .summaries()
        .into_iter()
        .map(|summary| CourseCard {
            id: summary.id.as_u32(),
            title: summary.title,
            description: summary.description,
            duration: summary.duration,
            level: summary.level.label().to_string(),
            image: summary.image,
        })
        .collect())
}

/// The course listing page.
#[component]
pub fn CoursesPage() -> impl IntoView {
    let courses = Resource::new(|| (), |_| list_courses());

    view! {
        <div class="courses-page">
            <h1>"Kurslarımız"</h1>
            <Suspense fallback=move || view! { <p>"Yükleniyor..."</p> }>
                {move || {
                    courses.get().map(|result| {
                        match result {
                            Ok(items) => view! {
                                <div class="courses-grid">
                                    {items.into_iter().map(|course| view! {
                                        <CourseCardView course=course/>
                                    }).collect_view()}
                                </div>
                            }.into_any(),
                            Err(_) => view! {
                                <p class="error">"Kurslar yüklenemedi."</p>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// A single card in the listing grid.
#[component]
fn CourseCardView(course: CourseCard) -> impl IntoView {
    let detail_href = format!("/courses/{}", course.id);

    view! {
        <div class="course-card">
            <img src=course.image alt=course.title.clone()/>
            <div class="course-card-body">
                <h3>{course.title}</h3>
                <p>{course.description}</p>
                <div class="course-meta">
                    <span>"Süre: " {course.duration}</span>
                    <span>"Seviye: " {course.level}</span>
                </div>
                <a href=detail_href class="details-button">"Detayları Gör"</a>
            </div>
        </div>
    }
}
