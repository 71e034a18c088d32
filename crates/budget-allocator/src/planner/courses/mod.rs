mod catalog;

use super::domain::Course;
use catalog::courses_for_field;
use std::collections::HashSet;

pub use catalog::catalog_fields as course_fields;

/// Maximum number of courses surfaced for a set of career fields.
pub const MAX_COURSES: usize = 6;

/// Gathers courses for the given career fields.
///
/// Unknown fields contribute nothing. Courses are deduplicated by title
/// (first occurrence wins), free courses are listed before paid ones, ties are
/// broken by rating (highest first), and at most six are returned.
pub fn get_relevant_courses<S: AsRef<str>>(fields: &[S]) -> Vec<&'static Course> {
    let mut seen = HashSet::new();
    let mut courses: Vec<&'static Course> = fields
        .iter()
        .flat_map(|field| courses_for_field(field.as_ref()))
        .filter(|course| seen.insert(course.title))
        .collect();

    courses.sort_by(|a, b| {
        b.is_free()
            .cmp(&a.is_free())
            .then_with(|| b.rating.total_cmp(&a.rating))
    });
    courses.truncate(MAX_COURSES);
    courses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(courses: &[&Course]) -> Vec<&'static str> {
        courses.iter().map(|course| course.title).collect()
    }

    #[test]
    fn free_courses_come_first() {
        let courses = get_relevant_courses(&["Software Engineering"]);
        assert_eq!(
            titles(&courses),
            [
                "CS50's Introduction to Computer Science",
                "Complete Web Development Bootcamp",
                "Full Stack JavaScript Developer"
            ]
        );
    }

    #[test]
    fn duplicate_fields_are_deduplicated() {
        let once = get_relevant_courses(&["Software Engineering"]);
        let twice = get_relevant_courses(&["Software Engineering", "Software Engineering"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_field_yields_nothing() {
        assert!(get_relevant_courses(&["Nonexistent Field"]).is_empty());
        assert!(get_relevant_courses::<&str>(&[]).is_empty());
    }

    #[test]
    fn results_are_capped_at_six() {
        let courses = get_relevant_courses(&[
            "AI/Machine Learning Engineer",
            "AI Product Manager",
            "Data Science",
        ]);
        assert_eq!(courses.len(), MAX_COURSES);
        assert_eq!(courses[0].title, "AI for Everyone");
        assert_eq!(courses[1].title, "Introduction to Generative AI");
        assert!(!courses[2].is_free());
        assert_eq!(courses[2].title, "Machine Learning Specialization");
    }

    #[test]
    fn every_catalog_field_has_courses() {
        for field in course_fields() {
            assert!(!get_relevant_courses(&[*field]).is_empty(), "{field}");
        }
    }
}
