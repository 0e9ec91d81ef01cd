pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod segments;
pub mod server;

pub use error::{Error, Result};
