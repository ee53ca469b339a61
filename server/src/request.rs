mod loan;
mod sanction;
mod student;
mod validate;

pub use self::{loan::*, sanction::*, student::*};
