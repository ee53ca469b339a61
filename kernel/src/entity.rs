mod common;
mod loan;
mod notebook;
mod sanction;
mod student;

pub use self::{common::*, loan::*, notebook::*, sanction::*, student::*};
