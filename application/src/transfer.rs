mod loan;
mod sanction;
mod student;

pub use self::{loan::*, sanction::*, student::*};
