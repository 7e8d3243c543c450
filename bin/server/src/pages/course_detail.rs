//! Course detail page and its server function.

use leptos::prelude::*;
use leptos_router::{hooks::use_params, params::Params};

/// URL params for the course detail route.
#[derive(Params, PartialEq, Clone, Debug)]
struct CourseDetailParams {
    id: Option<String>,
}

/// Full course info for the detail page.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CourseView {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: String,
    pub image: String,
    pub price: String,
    pub instructor: String,
    pub topics: Vec<String>,
    pub requirements: Vec<String>,
}

/// Server function to fetch one course by its route key.
///
/// Returns `Ok(None)` when the key is malformed or no course has that id,
/// so the page renders its not-found state instead of an error.
#[server]
pub async fn get_course(id: String) -> Result<Option<CourseView>, ServerFnError> {
    use crate::server_helpers;
    use akademi_catalog::CourseId;

    let catalog = server_helpers::catalog().await?;

    let course = match id.parse::<CourseId>() {
        Ok(course_id) => catalog.course(course_id),
        Err(e) => {
            tracing::debug!(id = %id, error = %e, "Course route key did not parse");
            None
        }
    };

    Ok(course.map(|course| CourseView {
        id: course.id.as_u32(),
        title: course.title.clone(),
        description: course.description.clone(),
        duration: course.duration.clone(),
        level: course.level.label().to_string(),
        image: course.image.clone(),
        price: course.price.clone(),
        instructor: course.instructor.clone(),
        topics: course.topics.clone(),
        requirements: course.requirements.clone(),
    }))
}

/// The course detail page.
#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let params = use_params::<CourseDetailParams>();
    let course_id = Signal::derive(move || params.get().ok().and_then(|p| p.id));

    let course = Resource::new(
        move || course_id.get(),
        |id| async move {
            match id {
                Some(id) => get_course(id).await.ok().flatten(),
                None => None,
            }
        },
    );

    view! {
        <div class="course-detail-page">
            <Suspense fallback=move || view! { <p>"Yükleniyor..."</p> }>
                {move || {
                    course.get().map(|maybe_course| {
                        match maybe_course {
                            Some(course) => view! {
                                <CourseDetailView course=course/>
                            }.into_any(),
                            None => view! { <CourseNotFound/> }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Full detail rendering for one course.
#[component]
fn CourseDetailView(course: CourseView) -> impl IntoView {
    view! {
        <div class="course-detail">
            <a href="/courses" class="back-link">"Kurslara Dön"</a>
            <img src=course.image alt=course.title.clone() class="course-image"/>
            <div class="course-header">
                <h1>{course.title}</h1>
                <span class="course-level">{course.level}</span>
            </div>
            <div class="course-info">
                <span>"Süre: " {course.duration}</span>
                <span>"Eğitmen: " {course.instructor}</span>
            </div>
            <p class="course-description">{course.description}</p>

            <section class="course-topics">
                <h2>"Kurs İçeriği"</h2>
                <ul>
                    {course.topics.into_iter().map(|topic| view! {
                        <li>{topic}</li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="course-requirements">
                <h2>"Gereksinimler"</h2>
                <ul>
                    {course.requirements.into_iter().map(|requirement| view! {
                        <li>{requirement}</li>
                    }).collect_view()}
                </ul>
            </section>

            <div class="course-enroll">
                <span class="course-price">{course.price}</span>
                <button class="enroll-button">"Hemen Kaydol"</button>
            </div>
        </div>
    }
}

/// Not-found state for unknown course ids.
#[component]
fn CourseNotFound() -> impl IntoView {
    view! {
        <div class="course-not-found">
            <h1>"Kurs bulunamadı"</h1>
            <a href="/courses" class="back-link">"Kurslara Dön"</a>
        </div>
    }
}
