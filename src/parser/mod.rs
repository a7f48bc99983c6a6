pub mod convert;
pub mod raw;
pub mod record;

pub use convert::*;
pub use raw::*;
pub use record::*;
