// Domain layer: the in-memory roster of teachers and their students.
// Nothing here talks to the terminal; candidate names arrive through the
// `NameSource` trait so the same registration loops serve the interactive
// shell and the tests.

use crate::error::RosterError;
use serde::Serialize;
use tracing::debug;

/// Supplies candidate names to the registration loops.
///
/// `candidate` is asked again for the same `ordinal` (1-based slot number)
/// after every rejection, so an implementation backed by a prompt simply
/// re-prompts.
pub trait NameSource {
    type Error;

    /// Produce a candidate for slot `ordinal`.
    fn candidate(&mut self, ordinal: usize) -> Result<String, Self::Error>;

    /// Called with the reason a candidate was refused, before the next
    /// `candidate` call for the same slot.
    fn rejected(&mut self, err: &RosterError) -> Result<(), Self::Error>;
}

/// Ask `source` for candidates until `try_add` accepts one.
fn fill_slot<S, F>(source: &mut S, ordinal: usize, mut try_add: F) -> Result<(), S::Error>
where
    S: NameSource,
    F: FnMut(String) -> Result<(), RosterError>,
{
    loop {
        let name = source.candidate(ordinal)?;
        match try_add(name) {
            Ok(()) => return Ok(()),
            Err(err) => {
                debug!(ordinal, %err, "candidate rejected");
                source.rejected(&err)?;
            }
        }
    }
}

/// A teacher and the students registered under them, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Teacher {
    name: String,
    students: Vec<String>,
}

impl Teacher {
    fn new(name: String) -> Self {
        Self { name, students: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    /// Exact, case-sensitive membership test.
    pub fn has_student(&self, name: &str) -> bool {
        self.students.iter().any(|s| s == name)
    }

    /// Append `name` unless this teacher already has a student with it.
    pub fn try_add_student(&mut self, name: String) -> Result<(), RosterError> {
        if self.has_student(&name) {
            return Err(RosterError::DuplicateStudentName {
                teacher: self.name.clone(),
                name,
            });
        }
        debug!(teacher = %self.name, student = %name, "student registered");
        self.students.push(name);
        Ok(())
    }

    /// Register `count` students, re-asking `source` on every duplicate.
    ///
    /// `count` is taken as given: zero or a negative value registers nothing.
    pub fn register_students<S: NameSource>(&mut self, count: i32, source: &mut S) -> Result<(), S::Error> {
        let count = usize::try_from(count).unwrap_or(0);
        for ordinal in 1..=count {
            fill_slot(source, ordinal, |name| self.try_add_student(name))?;
        }
        Ok(())
    }
}

/// Ordered association of teacher names to their students.
///
/// Teacher names are unique across the roster; student names are unique per
/// teacher only. Entries are never removed or renamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    teachers: Vec<Teacher>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.teachers.iter().position(|t| t.name == name)
    }

    /// Append a teacher with no students unless the name is taken.
    pub fn try_add_teacher(&mut self, name: String) -> Result<(), RosterError> {
        if self.position(&name).is_some() {
            return Err(RosterError::DuplicateTeacherName { name });
        }
        debug!(teacher = %name, "teacher registered");
        self.teachers.push(Teacher::new(name));
        Ok(())
    }

    /// Register `count` teachers, re-asking `source` on every duplicate.
    /// The caller is responsible for rejecting a zero count beforehand.
    pub fn register_teachers<S: NameSource>(&mut self, count: usize, source: &mut S) -> Result<(), S::Error> {
        for ordinal in 1..=count {
            fill_slot(source, ordinal, |name| self.try_add_teacher(name))?;
        }
        Ok(())
    }

    /// Fails with `NoTeachersRegistered` on an empty roster.
    pub fn ensure_teachers(&self) -> Result<(), RosterError> {
        if self.is_empty() {
            return Err(RosterError::NoTeachersRegistered);
        }
        Ok(())
    }

    /// Fails with `NoTeachersRegistered` unless some teacher has a student.
    pub fn ensure_students(&self) -> Result<(), RosterError> {
        self.ensure_teachers()?;
        if self.teachers.iter().all(|t| t.students.is_empty()) {
            return Err(RosterError::NoTeachersRegistered);
        }
        Ok(())
    }

    pub fn teacher(&self, name: &str) -> Result<&Teacher, RosterError> {
        self.ensure_teachers()?;
        self.position(name)
            .map(|idx| &self.teachers[idx])
            .ok_or_else(|| RosterError::TeacherNotFound { name: name.to_string() })
    }

    pub fn teacher_mut(&mut self, name: &str) -> Result<&mut Teacher, RosterError> {
        self.ensure_teachers()?;
        match self.position(name) {
            Some(idx) => Ok(&mut self.teachers[idx]),
            None => Err(RosterError::TeacherNotFound { name: name.to_string() }),
        }
    }

    /// Every teacher with their students, in registration order.
    pub fn list_all(&self) -> Result<impl Iterator<Item = (&str, &[String])> + '_, RosterError> {
        self.ensure_teachers()?;
        Ok(self.teachers.iter().map(|t| (t.name(), t.students())))
    }

    pub fn students_of(&self, teacher: &str) -> Result<&[String], RosterError> {
        self.teacher(teacher).map(Teacher::students)
    }

    pub fn student_count(&self, teacher: &str) -> Result<usize, RosterError> {
        self.students_of(teacher).map(<[String]>::len)
    }

    /// The first teacher, in registration order, who has `student`.
    ///
    /// Student names are only unique per teacher, so the scan order decides
    /// which teacher is reported when several share a student name.
    pub fn teacher_of(&self, student: &str) -> Result<&str, RosterError> {
        self.ensure_students()?;
        self.teachers
            .iter()
            .find(|t| t.has_student(student))
            .map(Teacher::name)
            .ok_or_else(|| RosterError::StudentNotFound { name: student.to_string() })
    }
}
