//! Course record and its identifier type.
//!
//! A course identifier is a small integer carried through URLs in its
//! canonical decimal form ("1", "2", ...). Parsing is strict: anything
//! that is not the canonical form of a number fails to parse, so URL
//! keys like "02" or "+2" fall through to the not-found path the same
//! way unknown ids do.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a course id from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCourseIdError {
    /// The string that failed to parse.
    pub value: String,
}

impl fmt::Display for ParseCourseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid course id", self.value)
    }
}

impl std::error::Error for ParseCourseIdError {}

/// Unique identifier for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(u32);

impl CourseId {
    /// Creates a course id from a raw number.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = ParseCourseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Round-trip check rejects non-canonical forms ("02", "+2", " 2").
        s.parse::<u32>()
            .ok()
            .filter(|n| n.to_string() == s)
            .map(Self)
            .ok_or_else(|| ParseCourseIdError {
                value: s.to_string(),
            })
    }
}

impl From<u32> for CourseId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    /// No prior experience expected.
    Beginner,
    /// Builds on an introductory course.
    Intermediate,
    /// Assumes solid prior experience.
    Advanced,
}

impl CourseLevel {
    /// Returns the site-facing Turkish label for this level.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Başlangıç",
            Self::Intermediate => "Orta",
            Self::Advanced => "İleri",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A course offered by the academy.
///
/// This is the one authoritative record; the listing page consumes the
/// [`CourseSummary`] projection derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// Short description shown on cards and the detail page.
    pub description: String,
    /// Human-readable duration, e.g. "12 Hafta".
    pub duration: String,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Cover image URL.
    pub image: String,
    /// Display price, e.g. "₺6,999".
    pub price: String,
    /// Instructor name.
    pub instructor: String,
    /// Syllabus topics, in presentation order.
    pub topics: Vec<String>,
    /// Prerequisites, in presentation order.
    pub requirements: Vec<String>,
}

impl Course {
    /// Projects this course onto its listing summary.
    #[must_use]
    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            duration: self.duration.clone(),
            level: self.level,
            image: self.image.clone(),
        }
    }
}

/// The listing-page projection of a [`Course`].
///
/// Always derived from the authoritative record, never written by hand,
/// so the listing and the detail page cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Unique course identifier.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Human-readable duration.
    pub duration: String,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Cover image URL.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_display() {
        let id = CourseId::new(2);
        assert_eq!(id.to_string(), "2");
    }

    #[test]
    fn parse_canonical_id() {
        let id: CourseId = "2".parse().expect("should parse");
        assert_eq!(id, CourseId::new(2));
    }

    #[test]
    fn parse_rejects_leading_zero() {
        let result: Result<CourseId, _> = "02".parse();
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_sign_and_whitespace() {
        assert!("+2".parse::<CourseId>().is_err());
        assert!(" 2".parse::<CourseId>().is_err());
        assert!("2 ".parse::<CourseId>().is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("abc".parse::<CourseId>().is_err());
        assert!("".parse::<CourseId>().is_err());
        assert!("-1".parse::<CourseId>().is_err());
    }

    #[test]
    fn parse_error_carries_value() {
        let err = "xyz".parse::<CourseId>().unwrap_err();
        assert_eq!(err.value, "xyz");
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn level_labels() {
        assert_eq!(CourseLevel::Beginner.label(), "Başlangıç");
        assert_eq!(CourseLevel::Intermediate.label(), "Orta");
        assert_eq!(CourseLevel::Advanced.label(), "İleri");
    }

    #[test]
    fn level_display_matches_label() {
        assert_eq!(CourseLevel::Intermediate.to_string(), "Orta");
    }

    #[test]
    fn summary_projects_all_shared_fields() {
        let course = Course {
            id: CourseId::new(7),
            title: "Test".to_string(),
            description: "Desc".to_string(),
            duration: "4 Hafta".to_string(),
            level: CourseLevel::Advanced,
            image: "https://example.com/x.png".to_string(),
            price: "₺1".to_string(),
            instructor: "X".to_string(),
            topics: vec!["a".to_string()],
            requirements: vec!["b".to_string()],
        };

        let summary = course.summary();
        assert_eq!(summary.id, course.id);
        assert_eq!(summary.title, course.title);
        assert_eq!(summary.description, course.description);
        assert_eq!(summary.duration, course.duration);
        assert_eq!(summary.level, course.level);
        assert_eq!(summary.image, course.image);
    }

    #[test]
    fn course_id_serde_roundtrip() {
        let id = CourseId::new(3);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "3");
        let parsed: CourseId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
