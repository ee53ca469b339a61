use crate::controller::{Intake, TryIntake};
use crate::request::validate;
use application::transfer::{CreateStudentDto, GetStudentByIdDto, GetStudentByRutDto};
use error_stack::Report;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    rut: i32,
    dv: String,
    name: String,
    lastname: String,
    email: String,
    phone: String,
    campus: String,
    career: String,
}

#[derive(Debug)]
pub struct GetStudentByIdRequest {
    id: Uuid,
}

impl GetStudentByIdRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetStudentByRutRequest {
    rut: i32,
}

impl GetStudentByRutRequest {
    pub fn new(rut: i32) -> Self {
        Self { rut }
    }
}

pub struct StudentTransformer;

impl TryIntake<CreateStudentRequest> for StudentTransformer {
    type To = CreateStudentDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateStudentRequest) -> Result<Self::To, Self::Error> {
        validate::rut(input.rut)?;
        validate::dv(&input.dv)?;
        validate::email(&input.email)?;
        validate::phone(&input.phone)?;
        Ok(CreateStudentDto {
            rut: input.rut,
            dv: input.dv,
            name: input.name,
            lastname: input.lastname,
            email: input.email,
            phone: input.phone,
            campus: input.campus,
            career: input.career,
        })
    }
}

impl Intake<GetStudentByIdRequest> for StudentTransformer {
    type To = GetStudentByIdDto;
    fn emit(&self, input: GetStudentByIdRequest) -> Self::To {
        GetStudentByIdDto { id: input.id }
    }
}

impl Intake<GetStudentByRutRequest> for StudentTransformer {
    type To = GetStudentByRutDto;
    fn emit(&self, input: GetStudentByRutRequest) -> Self::To {
        GetStudentByRutDto { rut: input.rut }
    }
}

#[cfg(test)]
mod test {
    use super::{CreateStudentRequest, StudentTransformer};
    use crate::controller::TryIntake;
    use kernel::KernelError;

    fn enrollment() -> CreateStudentRequest {
        CreateStudentRequest {
            rut: 12345678,
            dv: String::from("5"),
            name: String::from("Violeta"),
            lastname: String::from("Parra"),
            email: String::from("violeta.parra@usach.cl"),
            phone: String::from("987654321"),
            campus: String::from("San Joaquin"),
            career: String::from("Ingenieria Informatica"),
        }
    }

    #[test]
    fn well_formed_enrollment_passes() {
        let dto = TryIntake::emit(&StudentTransformer, enrollment()).ok();
        assert_eq!(dto.map(|dto| dto.rut), Some(12345678));
    }

    #[test]
    fn bad_check_digit_is_rejected() {
        let request = CreateStudentRequest {
            dv: String::from("KK"),
            ..enrollment()
        };
        let error = TryIntake::emit(&StudentTransformer, request)
            .err()
            .map(|report| matches!(report.current_context(), KernelError::Validation));
        assert_eq!(error, Some(true));
    }

    #[test]
    fn bad_phone_is_rejected() {
        let request = CreateStudentRequest {
            phone: String::from("12345"),
            ..enrollment()
        };
        assert!(TryIntake::emit(&StudentTransformer, request).is_err());
    }
}
