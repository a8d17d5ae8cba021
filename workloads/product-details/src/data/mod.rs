//! Product data access.

mod response;
mod source;

pub use response::*;
pub use source::*;
