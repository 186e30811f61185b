//! Problem definition for the timetable GA.
//!
//! A [`Problem`] maps every course to the set of groups it is offered in.
//! Construction validates the structural invariants once; the rest of the
//! engine relies on them and addresses courses and groups by index,
//! translating back to the human-readable identifiers only at the report
//! boundary.

use std::collections::HashSet;
use std::fmt;

/// One course and the groups it can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    /// Course identifier, unique within the problem.
    pub id: String,
    /// Group identifiers this course is offered in. Never empty.
    pub groups: Vec<String>,
}

impl Course {
    /// Creates a course from an id and its offered group ids.
    pub fn new(id: impl Into<String>, groups: Vec<String>) -> Self {
        Self {
            id: id.into(),
            groups,
        }
    }
}

/// Validated problem definition: course → allowed groups.
///
/// Invariants (enforced by [`Problem::new`]):
/// - at least one course
/// - every course has at least one group
/// - course ids are unique
///
/// # Example
///
/// ```
/// use tt_evolve::{Course, Problem};
///
/// let problem = Problem::new(vec![
///     Course::new("MATH101", vec!["G1".into(), "G2".into()]),
///     Course::new("PHYS102", vec!["G1".into()]),
/// ])
/// .unwrap();
///
/// assert_eq!(problem.course_count(), 2);
/// assert_eq!(problem.group_count(0), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    courses: Vec<Course>,
}

impl Problem {
    /// Builds a problem definition, validating the invariants.
    pub fn new(courses: Vec<Course>) -> Result<Self, ProblemError> {
        if courses.is_empty() {
            return Err(ProblemError::EmptyCourseSet);
        }

        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id.as_str()) {
                return Err(ProblemError::DuplicateCourse(course.id.clone()));
            }
            if course.groups.is_empty() {
                return Err(ProblemError::EmptyGroupList(course.id.clone()));
            }
        }

        Ok(Self { courses })
    }

    /// Number of courses (the chromosome gene count).
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of groups offered for the course at `course_idx`.
    ///
    /// # Panics
    /// Panics if `course_idx` is out of range.
    pub fn group_count(&self, course_idx: usize) -> usize {
        self.courses[course_idx].groups.len()
    }

    /// The courses, in gene order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Resolves a (course index, group index) pair to identifiers.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn resolve(&self, course_idx: usize, group_idx: usize) -> (&str, &str) {
        let course = &self.courses[course_idx];
        (course.id.as_str(), course.groups[group_idx].as_str())
    }
}

/// Structural defects detected by [`Problem::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// The problem contains no courses.
    EmptyCourseSet,
    /// A course is offered in zero groups.
    EmptyGroupList(String),
    /// Two courses share the same id.
    DuplicateCourse(String),
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::EmptyCourseSet => write!(f, "problem contains no courses"),
            ProblemError::EmptyGroupList(id) => {
                write!(f, "course '{id}' has no groups")
            }
            ProblemError::DuplicateCourse(id) => {
                write!(f, "duplicate course id: {id}")
            }
        }
    }
}

impl std::error::Error for ProblemError {}
