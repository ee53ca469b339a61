use serde::{Deserialize, Serialize};

use crate::KernelError;

/*
 * Wire representation is the integer the clients already speak:
 * 0 = Active, 1 = Finalized, 2 = Pending.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanState {
    Active,
    Finalized,
    Pending,
}

impl From<LoanState> for i32 {
    fn from(state: LoanState) -> Self {
        match state {
            LoanState::Active => 0,
            LoanState::Finalized => 1,
            LoanState::Pending => 2,
        }
    }
}

impl TryFrom<i32> for LoanState {
    type Error = KernelError;
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LoanState::Active),
            1 => Ok(LoanState::Finalized),
            2 => Ok(LoanState::Pending),
            _ => Err(KernelError::Validation),
        }
    }
}
