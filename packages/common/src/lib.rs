pub mod error;
pub mod generator;
pub mod result;
pub mod writer;

pub use error::*;
pub use generator::*;
pub use result::*;
pub use writer::*;
