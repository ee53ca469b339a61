mod loan;
mod notebook;
mod public;
mod sanction;
mod student;

pub use self::{loan::*, notebook::*, public::*, sanction::*, student::*};
