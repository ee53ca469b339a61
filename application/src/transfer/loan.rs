use kernel::prelude::entity::LoanState;
use uuid::Uuid;

pub struct CreateLoanDto {
    pub student_rut: i32,
    pub notebook_id: Uuid,
}

/*
 * `state` carries the raw wire integer. The service rejects values
 * outside the known mapping with a Validation error.
 */
pub struct ModifyLoanStateDto {
    pub student_rut: i32,
    pub state: i32,
}

pub struct GetLoanDto {
    pub id: Uuid,
}

pub struct GetLoansByRutDto {
    pub rut: i32,
}

pub struct GetLoansByStateDto {
    pub state: LoanState,
}
