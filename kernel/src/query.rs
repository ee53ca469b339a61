mod loan;
mod notebook;
mod sanction;
mod student;

pub use self::{loan::*, notebook::*, sanction::*, student::*};
