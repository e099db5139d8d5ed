//! Property tests for the roster invariants.

use proptest::prelude::*;
use roster_cli::{NameSource, Roster, RosterError};
use std::collections::VecDeque;

/// Candidates from a fixed list; rejections are counted.
struct Candidates {
    names: VecDeque<String>,
    rejections: usize,
}

impl NameSource for Candidates {
    type Error = ();

    fn candidate(&mut self, _ordinal: usize) -> Result<String, ()> {
        self.names.pop_front().ok_or(())
    }

    fn rejected(&mut self, err: &RosterError) -> Result<(), ()> {
        assert!(matches!(err, RosterError::DuplicateTeacherName { .. }));
        self.rejections += 1;
        Ok(())
    }
}

/// First occurrence of every name, in input order.
fn first_occurrences(names: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(name) {
            seen.push(name.clone());
        }
    }
    seen
}

fn build(entries: &[(String, Vec<String>)]) -> Roster {
    let mut roster = Roster::new();
    for (teacher, students) in entries {
        let _ = roster.try_add_teacher(teacher.clone());
        let target = roster.teacher_mut(teacher).unwrap();
        for student in students {
            let _ = target.try_add_student(student.clone());
        }
    }
    roster
}

fn entries() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        ("[A-C]{1,2}", prop::collection::vec("[a-c]{1,2}", 0..6)),
        1..8,
    )
}

proptest! {
    #[test]
    fn registered_teachers_are_unique(names in prop::collection::vec("[a-c]{1,2}", 1..16)) {
        let expected = first_occurrences(&names);
        let mut source = Candidates { names: names.iter().cloned().collect(), rejections: 0 };
        let mut roster = Roster::new();

        roster.register_teachers(expected.len(), &mut source).unwrap();

        let registered: Vec<String> = roster.teachers().iter().map(|t| t.name().to_string()).collect();
        prop_assert_eq!(&registered, &expected);
        prop_assert_eq!(source.rejections + expected.len() + source.names.len(), names.len());
    }

    #[test]
    fn students_are_unique_per_teacher(entries in entries()) {
        let roster = build(&entries);
        for teacher in roster.teachers() {
            let students = teacher.students();
            for (i, s) in students.iter().enumerate() {
                prop_assert!(!students[i + 1..].contains(s));
            }
        }
    }

    #[test]
    fn count_matches_listing(entries in entries()) {
        let roster = build(&entries);
        for teacher in roster.teachers() {
            prop_assert_eq!(
                roster.student_count(teacher.name()).unwrap(),
                roster.students_of(teacher.name()).unwrap().len()
            );
        }
    }

    #[test]
    fn find_returns_first_registered_teacher(entries in entries(), probe in "[a-c]{1,2}") {
        let roster = build(&entries);
        let any_students = roster.teachers().iter().any(|t| !t.students().is_empty());
        let expected = roster
            .teachers()
            .iter()
            .find(|t| t.students().contains(&probe))
            .map(|t| t.name());

        match (any_students, expected) {
            (false, _) => {
                prop_assert_eq!(roster.teacher_of(&probe), Err(RosterError::NoTeachersRegistered));
            }
            (true, Some(name)) => {
                prop_assert_eq!(roster.teacher_of(&probe), Ok(name));
            }
            (true, None) => {
                prop_assert_eq!(
                    roster.teacher_of(&probe),
                    Err(RosterError::StudentNotFound { name: probe.clone() })
                );
            }
        }
    }
}
