// UI layer: the numbered text menu and one small flow per option.
// Each flow checks the roster preconditions before asking for anything,
// prints the outcome and returns to the menu. Only console failures
// escape this module.

use crate::console::{parse_number, Console, ConsoleError};
use crate::error::RosterError;
use crate::messages as msg;
use crate::roster::{NameSource, Roster};
use tracing::{debug, info};

/// The seven entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    RegisterTeachers,
    RegisterStudents,
    ListAll,
    ListStudents,
    CountStudents,
    FindTeacher,
    Exit,
}

impl MenuOption {
    /// Map a typed selection (1-7) to its option.
    pub fn from_selection(selection: i32) -> Option<Self> {
        match selection {
            1 => Some(Self::RegisterTeachers),
            2 => Some(Self::RegisterStudents),
            3 => Some(Self::ListAll),
            4 => Some(Self::ListStudents),
            5 => Some(Self::CountStudents),
            6 => Some(Self::FindTeacher),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Main interactive menu. Runs until the user picks "Salir" or the input
/// stream ends; both count as a normal end of the session.
pub fn main_menu<C: Console>(roster: &mut Roster, console: &mut C) -> Result<(), ConsoleError> {
    match run(roster, console) {
        Err(ConsoleError::Closed) => {
            info!("input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

fn run<C: Console>(roster: &mut Roster, console: &mut C) -> Result<(), ConsoleError> {
    loop {
        for line in msg::MENU {
            console.say(line)?;
        }
        let selection = read_selection(console)?;
        let Some(option) = MenuOption::from_selection(selection) else {
            debug!(selection, "unknown menu option");
            console.say(msg::INVALID_OPTION)?;
            continue;
        };
        debug!(?option, "menu option selected");
        match option {
            MenuOption::RegisterTeachers => handle_register_teachers(roster, console)?,
            MenuOption::RegisterStudents => handle_register_students(roster, console)?,
            MenuOption::ListAll => handle_list_all(roster, console)?,
            MenuOption::ListStudents => handle_list_students(roster, console)?,
            MenuOption::CountStudents => handle_count_students(roster, console)?,
            MenuOption::FindTeacher => handle_find_teacher(roster, console)?,
            MenuOption::Exit => {
                console.say(msg::EXITING)?;
                info!("exit selected");
                return Ok(());
            }
        }
    }
}

/// Collect a positive teacher count, then one unique name per slot.
fn handle_register_teachers<C: Console>(roster: &mut Roster, console: &mut C) -> Result<(), ConsoleError> {
    let count = read_number(console, msg::TEACHER_COUNT, |n| n > 0)?;
    let count = usize::try_from(count).unwrap_or(0);
    let mut names = PromptedNames { console, prompt: msg::teacher_name_slot };
    roster.register_teachers(count, &mut names)
}

/// Pick a teacher by name, then collect students for them. An unknown
/// teacher ends the flow without asking again.
fn handle_register_students<C: Console>(roster: &mut Roster, console: &mut C) -> Result<(), ConsoleError> {
    if roster.ensure_teachers().is_err() {
        return console.say(msg::REGISTER_TEACHERS_FIRST);
    }
    let name = console.ask(msg::TEACHER_NAME)?;
    let teacher = match roster.teacher_mut(&name) {
        Ok(teacher) => teacher,
        Err(err) => return report(console, &err),
    };
    // Any integer goes; a non-positive count registers nobody.
    let count = read_number(console, &msg::student_count(&name), |_| true)?;
    let mut names = PromptedNames { console, prompt: msg::student_name_slot };
    teacher.register_students(count, &mut names)
}

fn handle_list_all<C: Console>(roster: &Roster, console: &mut C) -> Result<(), ConsoleError> {
    let entries = match roster.list_all() {
        Ok(entries) => entries,
        Err(err) => return report(console, &err),
    };
    console.say(msg::ROSTER_HEADER)?;
    for (teacher, students) in entries {
        console.say(&msg::teacher_line(teacher))?;
        console.say(msg::STUDENTS_HEADER)?;
        for student in students {
            console.say(&msg::student_line(student))?;
        }
        console.say("")?;
    }
    Ok(())
}

fn handle_list_students<C: Console>(roster: &Roster, console: &mut C) -> Result<(), ConsoleError> {
    if let Err(err) = roster.ensure_teachers() {
        return report(console, &err);
    }
    let name = console.ask(msg::TEACHER_NAME)?;
    match roster.students_of(&name) {
        Ok(students) => {
            console.say(&msg::students_of(&name))?;
            for student in students {
                console.say(&msg::student_line(student))?;
            }
            Ok(())
        }
        Err(err) => report(console, &err),
    }
}

fn handle_count_students<C: Console>(roster: &Roster, console: &mut C) -> Result<(), ConsoleError> {
    if let Err(err) = roster.ensure_teachers() {
        return report(console, &err);
    }
    let name = console.ask(msg::TEACHER_NAME)?;
    match roster.student_count(&name) {
        Ok(count) => console.say(&msg::count_of(&name, count)),
        Err(err) => report(console, &err),
    }
}

fn handle_find_teacher<C: Console>(roster: &Roster, console: &mut C) -> Result<(), ConsoleError> {
    if roster.ensure_students().is_err() {
        return console.say(msg::REGISTER_BOTH_FIRST);
    }
    let student = console.ask(msg::STUDENT_NAME)?;
    match roster.teacher_of(&student) {
        Ok(teacher) => console.say(&msg::teacher_of(&student, teacher)),
        Err(err) => report(console, &err),
    }
}

/// Print the standard line for a refused request.
fn report<C: Console>(console: &mut C, err: &RosterError) -> Result<(), ConsoleError> {
    debug!(%err, "request refused");
    let line = match err {
        RosterError::DuplicateTeacherName { .. } => msg::DUPLICATE_TEACHER,
        RosterError::DuplicateStudentName { .. } => msg::DUPLICATE_STUDENT,
        RosterError::TeacherNotFound { .. } => msg::TEACHER_NOT_FOUND,
        RosterError::StudentNotFound { .. } => msg::STUDENT_NOT_FOUND,
        RosterError::NoTeachersRegistered => msg::NO_TEACHERS,
    };
    console.say(line)
}

/// Names typed at a numbered prompt; duplicates are reported and the same
/// slot is asked again.
struct PromptedNames<'c, C> {
    console: &'c mut C,
    prompt: fn(usize) -> String,
}

impl<C: Console> NameSource for PromptedNames<'_, C> {
    type Error = ConsoleError;

    fn candidate(&mut self, ordinal: usize) -> Result<String, ConsoleError> {
        self.console.ask(&(self.prompt)(ordinal))
    }

    fn rejected(&mut self, err: &RosterError) -> Result<(), ConsoleError> {
        report(self.console, err)
    }
}

/// Read the next line carrying a token. Blank lines are skipped silently;
/// `prompt` is shown only before the first read.
fn next_filled_line<C: Console>(console: &mut C, prompt: Option<&str>) -> Result<String, ConsoleError> {
    let mut line = match prompt {
        Some(prompt) => console.ask(prompt)?,
        None => console.read_line()?,
    };
    while line.trim().is_empty() {
        line = console.read_line()?;
    }
    Ok(line)
}

/// Menu selection: after a malformed line only the retry message is shown,
/// not the menu or the prompt.
fn read_selection<C: Console>(console: &mut C) -> Result<i32, ConsoleError> {
    let mut prompt = Some(msg::SELECT_OPTION);
    loop {
        let line = next_filled_line(console, prompt.take())?;
        match parse_number(&line) {
            Ok(selection) => return Ok(selection),
            Err(err) => {
                debug!(%err, "malformed menu selection");
                console.say(msg::INVALID_NUMBER)?;
            }
        }
    }
}

/// Prompt until a number satisfying `accept` is typed, repeating the prompt
/// after each retry message.
fn read_number<C, F>(console: &mut C, prompt: &str, accept: F) -> Result<i32, ConsoleError>
where
    C: Console,
    F: Fn(i32) -> bool,
{
    loop {
        let line = next_filled_line(console, Some(prompt))?;
        match parse_number(&line) {
            Ok(n) if accept(n) => return Ok(n),
            Ok(n) => debug!(n, "number out of range"),
            Err(err) => debug!(%err, "malformed number"),
        }
        console.say(msg::INVALID_NUMBER)?;
    }
}
