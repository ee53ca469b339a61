use error_stack::Context;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum KernelError {
    NotFound,
    Validation,
    Conflict,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Not found"),
            KernelError::Validation => write!(f, "Validation error"),
            KernelError::Conflict => write!(f, "Conflict"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Timeout"),
            KernelError::Internal => write!(f, "Internal error"),
        }
    }
}

impl Context for KernelError {}
