use time::OffsetDateTime;
use uuid::Uuid;

pub struct ApplySanctionDto {
    pub student_rut: i32,
    pub description: String,
    pub finish_date: OffsetDateTime,
    pub loan_id: Option<Uuid>,
}

pub struct RemoveSanctionDto {
    pub student_rut: i32,
    pub loan_id: Option<Uuid>,
    pub unblock_student: bool,
}

pub struct GetSanctionsByRutDto {
    pub rut: i32,
}
