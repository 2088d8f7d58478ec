//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod ghapi;
mod health;
mod metrics;
mod repositories;
pub mod server;
pub mod translator;

pub use errors::{Result, ServerError};
