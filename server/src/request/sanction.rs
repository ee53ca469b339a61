use crate::controller::{Intake, TryIntake};
use crate::request::validate;
use application::transfer::{ApplySanctionDto, GetSanctionsByRutDto, RemoveSanctionDto};
use error_stack::Report;
use kernel::KernelError;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ApplySanctionRequest {
    description: String,
    #[serde(with = "time::serde::rfc3339")]
    finish_date: OffsetDateTime,
    loan_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveSanctionRequest {
    loan_id: Option<Uuid>,
    #[serde(default)]
    unblock_student: bool,
}

#[derive(Debug)]
pub struct SanctionsByRutRequest {
    rut: i32,
}

impl SanctionsByRutRequest {
    pub fn new(rut: i32) -> Self {
        Self { rut }
    }
}

pub struct SanctionTransformer;

impl TryIntake<(i32, ApplySanctionRequest)> for SanctionTransformer {
    type To = ApplySanctionDto;
    type Error = Report<KernelError>;
    fn emit(&self, (rut, req): (i32, ApplySanctionRequest)) -> Result<Self::To, Self::Error> {
        validate::description(&req.description)?;
        Ok(ApplySanctionDto {
            student_rut: rut,
            description: req.description,
            finish_date: req.finish_date,
            loan_id: req.loan_id,
        })
    }
}

impl Intake<(i32, RemoveSanctionRequest)> for SanctionTransformer {
    type To = RemoveSanctionDto;
    fn emit(&self, (rut, req): (i32, RemoveSanctionRequest)) -> Self::To {
        RemoveSanctionDto {
            student_rut: rut,
            loan_id: req.loan_id,
            unblock_student: req.unblock_student,
        }
    }
}

impl Intake<SanctionsByRutRequest> for SanctionTransformer {
    type To = GetSanctionsByRutDto;
    fn emit(&self, input: SanctionsByRutRequest) -> Self::To {
        GetSanctionsByRutDto { rut: input.rut }
    }
}

#[cfg(test)]
mod test {
    use super::{ApplySanctionRequest, RemoveSanctionRequest, SanctionTransformer};
    use crate::controller::TryIntake;
    use kernel::KernelError;

    #[test]
    fn apply_body_parses_rfc3339() {
        let raw = r#"{
            "description": "Returned the notebook two days late",
            "finish_date": "2026-09-01T12:00:00Z",
            "loan_id": null
        }"#;
        let request: ApplySanctionRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.finish_date.year(), 2026);
    }

    #[test]
    fn unblock_flag_defaults_to_false() {
        let request: RemoveSanctionRequest = serde_json::from_str(r#"{"loan_id": null}"#).unwrap();
        assert!(!request.unblock_student);
    }

    #[test]
    fn short_description_is_rejected() {
        let raw = r#"{
            "description": "Late",
            "finish_date": "2026-09-01T12:00:00Z",
            "loan_id": null
        }"#;
        let request: ApplySanctionRequest = serde_json::from_str(raw).unwrap();
        let error = TryIntake::emit(&SanctionTransformer, (12345678, request))
            .err()
            .map(|report| matches!(report.current_context(), KernelError::Validation));
        assert_eq!(error, Some(true));
    }
}
