use crate::controller::{Intake, TryIntake};
use crate::request::validate;
use application::transfer::{
    CreateLoanDto, GetLoanDto, GetLoansByRutDto, GetLoansByStateDto, ModifyLoanStateDto,
};
use error_stack::Report;
use kernel::prelude::entity::LoanState;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateLoanRequest {
    student_rut: i32,
    notebook_id: Uuid,
}

#[derive(Debug)]
pub struct GetLoanRequest {
    id: Uuid,
}

impl GetLoanRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

// The legacy clients send the query key capitalized.
#[derive(Debug, Deserialize)]
pub struct LoansByRutRequest {
    #[serde(alias = "Rut")]
    rut: i32,
}

#[derive(Debug)]
pub struct LoansByStateRequest {
    state: LoanState,
}

impl LoansByStateRequest {
    pub fn new(state: LoanState) -> Self {
        Self { state }
    }
}

#[derive(Debug)]
pub struct ModifyLoanRequest {
    rut: i32,
    state: i32,
}

impl ModifyLoanRequest {
    pub fn new(rut: i32, state: i32) -> Self {
        Self { rut, state }
    }
}

pub struct LoanTransformer;

impl TryIntake<CreateLoanRequest> for LoanTransformer {
    type To = CreateLoanDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateLoanRequest) -> Result<Self::To, Self::Error> {
        validate::rut(input.student_rut)?;
        Ok(CreateLoanDto {
            student_rut: input.student_rut,
            notebook_id: input.notebook_id,
        })
    }
}

impl Intake<GetLoanRequest> for LoanTransformer {
    type To = GetLoanDto;
    fn emit(&self, input: GetLoanRequest) -> Self::To {
        GetLoanDto { id: input.id }
    }
}

impl Intake<LoansByRutRequest> for LoanTransformer {
    type To = GetLoansByRutDto;
    fn emit(&self, input: LoansByRutRequest) -> Self::To {
        GetLoansByRutDto { rut: input.rut }
    }
}

impl Intake<LoansByStateRequest> for LoanTransformer {
    type To = GetLoansByStateDto;
    fn emit(&self, input: LoansByStateRequest) -> Self::To {
        GetLoansByStateDto { state: input.state }
    }
}

impl Intake<ModifyLoanRequest> for LoanTransformer {
    type To = ModifyLoanStateDto;
    fn emit(&self, input: ModifyLoanRequest) -> Self::To {
        ModifyLoanStateDto {
            student_rut: input.rut,
            state: input.state,
        }
    }
}
