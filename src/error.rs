// Error types for the roster. Every variant is an expected, recoverable
// outcome of a user request; the UI layer matches on them and prints the
// corresponding message instead of aborting.

use thiserror::Error;

/// Errors signalled by [`crate::roster::Roster`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A teacher with this exact name is already registered.
    #[error("teacher already exists: {name:?}")]
    DuplicateTeacherName {
        /// The rejected candidate.
        name: String,
    },

    /// The teacher already has a student with this exact name.
    #[error("student {name:?} already registered under teacher {teacher:?}")]
    DuplicateStudentName {
        /// Teacher the student was being added to.
        teacher: String,
        /// The rejected candidate.
        name: String,
    },

    /// No registered teacher matches the given name.
    #[error("teacher not found: {name:?}")]
    TeacherNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The operation needs registered teachers (or students) and there are none.
    #[error("no teachers registered")]
    NoTeachersRegistered,

    /// No teacher has a student with the given name.
    #[error("student not found: {name:?}")]
    StudentNotFound {
        /// The name that was looked up.
        name: String,
    },
}
