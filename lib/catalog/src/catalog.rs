//! The embedded course catalog.
//!
//! The site has no database; the catalog is a constant built at startup.
//! Both the listing and the detail page read from this one table, the
//! listing through the [`CourseSummary`] projection.

use crate::course::{Course, CourseId, CourseLevel, CourseSummary};

/// The course table, in listing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Builds the built-in catalog shipped with the site.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            courses: vec![
                Course {
                    id: CourseId::new(1),
                    title: "Python ile Yapay Zeka".to_string(),
                    description: "Python programlama dili ile yapay zeka ve makine \
                                  öğrenmesi temellerini öğrenin."
                        .to_string(),
                    duration: "8 Hafta".to_string(),
                    level: CourseLevel::Beginner,
                    image: "https://via.placeholder.com/800x400".to_string(),
                    price: "₺4,999".to_string(),
                    instructor: "Dr. Ahmet Yılmaz".to_string(),
                    topics: vec![
                        "Python Temelleri".to_string(),
                        "Veri Analizi ve Görselleştirme".to_string(),
                        "Makine Öğrenmesi Algoritmaları".to_string(),
                        "Derin Öğrenme Temelleri".to_string(),
                        "Proje Geliştirme".to_string(),
                    ],
                    requirements: vec![
                        "Temel programlama bilgisi".to_string(),
                        "Matematik temelleri".to_string(),
                        "İngilizce okuma anlama".to_string(),
                    ],
                },
                Course {
                    id: CourseId::new(2),
                    title: "Derin Öğrenme".to_string(),
                    description: "Neural Networks ve Deep Learning konularında uzmanlaşın."
                        .to_string(),
                    duration: "12 Hafta".to_string(),
                    level: CourseLevel::Intermediate,
                    image: "https://via.placeholder.com/800x400".to_string(),
                    price: "₺6,999".to_string(),
                    instructor: "Prof. Mehmet Demir".to_string(),
                    topics: vec![
                        "Neural Networks Temelleri".to_string(),
                        "CNN ve RNN Modelleri".to_string(),
                        "Transfer Learning".to_string(),
                        "Model Optimizasyonu".to_string(),
                        "Gerçek Dünya Uygulamaları".to_string(),
                    ],
                    requirements: vec![
                        "Python ile Yapay Zeka kursu".to_string(),
                        "İleri düzey matematik".to_string(),
                        "GPU deneyimi".to_string(),
                    ],
                },
                Course {
                    id: CourseId::new(3),
                    title: "Doğal Dil İşleme".to_string(),
                    description: "NLP teknikleri ve uygulamaları ile metin analizi yapın."
                        .to_string(),
                    duration: "10 Hafta".to_string(),
                    level: CourseLevel::Advanced,
                    image: "https://via.placeholder.com/800x400".to_string(),
                    price: "₺5,999".to_string(),
                    instructor: "Dr. Ayşe Kaya".to_string(),
                    topics: vec![
                        "Metin Ön İşleme".to_string(),
                        "Kelime Gömme Teknikleri".to_string(),
                        "Transformer Modelleri".to_string(),
                        "Duygu Analizi".to_string(),
                        "Metin Sınıflandırma".to_string(),
                    ],
                    requirements: vec![
                        "Python programlama".to_string(),
                        "Temel NLP bilgisi".to_string(),
                        "Veri yapıları".to_string(),
                    ],
                },
            ],
        }
    }

    /// All courses, in listing order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Looks up a course by id.
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Listing summaries, projected from the course table in order.
    #[must_use]
    pub fn summaries(&self) -> Vec<CourseSummary> {
        self.courses.iter().map(Course::summary).collect()
    }

    /// Number of courses in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if the catalog holds no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn builtin_has_three_courses() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn known_ids_resolve() {
        let catalog = Catalog::builtin();
        for id in 1..=3 {
            assert!(catalog.course(CourseId::new(id)).is_some(), "id {id}");
        }
    }

    #[test]
    fn course_one_matches_table() {
        let catalog = Catalog::builtin();
        let course = catalog.course(CourseId::new(1)).expect("course 1");
        assert_eq!(course.title, "Python ile Yapay Zeka");
        assert_eq!(course.price, "₺4,999");
        assert_eq!(course.instructor, "Dr. Ahmet Yılmaz");
        assert_eq!(course.level, CourseLevel::Beginner);
        assert_eq!(course.topics.len(), 5);
        assert_eq!(course.requirements.len(), 3);
    }

    #[test]
    fn course_two_matches_table() {
        let catalog = Catalog::builtin();
        let course = catalog.course(CourseId::new(2)).expect("course 2");
        assert_eq!(course.title, "Derin Öğrenme");
        assert_eq!(course.duration, "12 Hafta");
        assert_eq!(course.level.label(), "Orta");
        assert_eq!(course.price, "₺6,999");
        assert_eq!(course.instructor, "Prof. Mehmet Demir");
    }

    #[test]
    fn course_three_matches_table() {
        let catalog = Catalog::builtin();
        let course = catalog.course(CourseId::new(3)).expect("course 3");
        assert_eq!(course.title, "Doğal Dil İşleme");
        assert_eq!(course.price, "₺5,999");
        assert_eq!(course.instructor, "Dr. Ayşe Kaya");
        assert_eq!(course.level, CourseLevel::Advanced);
    }

    #[test]
    fn unknown_id_misses() {
        let catalog = Catalog::builtin();
        assert!(catalog.course(CourseId::new(99)).is_none());
        assert!(catalog.course(CourseId::new(0)).is_none());
    }

    #[test]
    fn malformed_route_keys_fall_through() {
        let catalog = Catalog::builtin();
        for key in ["02", "+2", "abc", "", "2.0", "٢"] {
            let looked_up = CourseId::from_str(key)
                .ok()
                .and_then(|id| catalog.course(id));
            assert!(looked_up.is_none(), "key {key:?} should miss");
        }
    }

    #[test]
    fn summaries_match_courses_in_order() {
        let catalog = Catalog::builtin();
        let summaries = catalog.summaries();
        assert_eq!(summaries.len(), catalog.len());

        for (summary, course) in summaries.iter().zip(catalog.courses()) {
            assert_eq!(summary.id, course.id);
            assert_eq!(summary.title, course.title);
            assert_eq!(summary.description, course.description);
            assert_eq!(summary.duration, course.duration);
            assert_eq!(summary.level, course.level);
            assert_eq!(summary.image, course.image);
        }
    }

    #[test]
    fn course_serde_roundtrip() {
        let catalog = Catalog::builtin();
        let course = catalog.course(CourseId::new(2)).expect("course 2");
        let json = serde_json::to_string(course).expect("serialize");
        let parsed: Course = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(*course, parsed);
    }
}
