mod base;
mod cast;
mod error;

pub use base::*;
pub use cast::*;
pub use error::ArrayError;
