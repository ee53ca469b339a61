use uuid::Uuid;

pub struct CreateStudentDto {
    pub rut: i32,
    pub dv: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub campus: String,
    pub career: String,
}

pub struct GetStudentByIdDto {
    pub id: Uuid,
}

pub struct GetStudentByRutDto {
    pub rut: i32,
}
