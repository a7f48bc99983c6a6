pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod ingest;
pub mod model;
pub mod parser;
pub mod query;
pub mod schema;
pub mod server;
pub mod store;

pub use cli::{Cli, Commands};
pub use error::{Error, Result};
pub use store::Store;
