// Library root
// -----------
// The binary (`main.rs`) wires these modules into the interactive program.
//
// Module responsibilities:
// - `roster`: the teacher/student data model, its uniqueness rules and the
//   registration and query operations.
// - `error`: typed outcomes the roster signals (duplicates, lookups that
//   find nothing, empty roster).
// - `console`: line input/output behind a small trait, with a plain
//   implementation for pipes and tests and a `dialoguer` one for terminals.
// - `messages`: the prompt and result texts.
// - `ui`: the numbered menu and the flow behind each option.
//
// The roster never touches the terminal, so it can be driven directly from
// tests or from a different front end.
pub mod console;
pub mod error;
pub mod messages;
pub mod roster;
pub mod ui;

pub use error::RosterError;
pub use roster::{NameSource, Roster, Teacher};
