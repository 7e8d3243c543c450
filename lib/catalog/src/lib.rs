//! Course catalog for the Yapay Zeka Akademisi site.
//!
//! Domain types for courses plus the embedded course table the pages
//! render from. The catalog is constant; there is no persistence layer
//! behind it.

pub mod catalog;
pub mod course;

pub use catalog::Catalog;
pub use course::{Course, CourseId, CourseLevel, CourseSummary, ParseCourseIdError};
