// User-facing texts. Prompts are stored without their trailing ": ", which
// each console adds in its own way.

pub const MENU: [&str; 8] = [
    "Menú:",
    "1. Registrar profesores.",
    "2. Registrar estudiantes asociados al profesor.",
    "3. Consultar lista total de profesores y sus estudiantes asociados.",
    "4. Consultar un profesor e imprimir la lista de estudiantes asociados.",
    "5. Consultar un profesor e indicar la cantidad de estudiantes asociados.",
    "6. Consultar un estudiante e indicar cual es su director de grupo.",
    "7. Salir.",
];

pub const SELECT_OPTION: &str = "Seleccione una opción";
pub const TEACHER_COUNT: &str = "Ingrese la cantidad de profesores a registrar";
pub const TEACHER_NAME: &str = "Ingrese el nombre del profesor";
pub const STUDENT_NAME: &str = "Ingrese el nombre del estudiante";

pub const INVALID_NUMBER: &str = "Por favor, ingrese un número válido.";
pub const INVALID_OPTION: &str = "Opción no válida.";
pub const EXITING: &str = "Saliendo...";

pub const DUPLICATE_TEACHER: &str = "El nombre del profesor ya existe. Ingrese un nombre diferente.";
pub const DUPLICATE_STUDENT: &str = "El nombre del estudiante ya existe. Ingrese un nombre diferente.";
pub const TEACHER_NOT_FOUND: &str = "Profesor no encontrado.";
pub const STUDENT_NOT_FOUND: &str = "Estudiante no encontrado.";

pub const REGISTER_TEACHERS_FIRST: &str = "Debe registrar profesores antes de registrar estudiantes.";
pub const NO_TEACHERS: &str = "No hay profesores registrados.";
pub const REGISTER_BOTH_FIRST: &str = "Debe registrar profesores y estudiantes antes de realizar esta consulta.";

pub const ROSTER_HEADER: &str = "Lista de profesores y sus estudiantes:";
pub const STUDENTS_HEADER: &str = "Estudiantes:";

pub fn teacher_name_slot(ordinal: usize) -> String {
    format!("{TEACHER_NAME} {ordinal}")
}

pub fn student_name_slot(ordinal: usize) -> String {
    format!("{STUDENT_NAME} {ordinal}")
}

pub fn student_count(teacher: &str) -> String {
    format!("Ingrese la cantidad de estudiantes a registrar para {teacher}")
}

pub fn teacher_line(teacher: &str) -> String {
    format!("Profesor: {teacher}")
}

pub fn student_line(student: &str) -> String {
    format!("- {student}")
}

pub fn students_of(teacher: &str) -> String {
    format!("Estudiantes del profesor {teacher}:")
}

pub fn count_of(teacher: &str, count: usize) -> String {
    format!("El profesor {teacher} tiene {count} estudiantes.")
}

pub fn teacher_of(student: &str, teacher: &str) -> String {
    format!("El estudiante {student} está asociado al profesor {teacher}.")
}
