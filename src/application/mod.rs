pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationResult;
