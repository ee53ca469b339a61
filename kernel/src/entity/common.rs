mod time;
mod version;

pub use self::{time::*, version::*};
