pub mod client;
pub mod source;

pub use client::*;
pub use source::*;
