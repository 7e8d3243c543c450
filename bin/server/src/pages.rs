//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route,
//! along with any server functions specific to that page.

pub mod about;
pub mod ai_presentation;
pub mod contact;
pub mod course_detail;
pub mod courses;
pub mod home;
pub mod not_found;

// Re-export all page components for convenient access
pub use about::AboutPage;
pub use ai_presentation::AiPresentationPage;
pub use contact::ContactPage;
pub use course_detail::CourseDetailPage;
pub use courses::CoursesPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
