//! GitHub API interface.
//!
//! Contains the upstream data model and the service trait implemented by API drivers.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
mod params;
pub mod types;

pub use errors::{ApiError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
pub use interface::ApiService;
pub use params::{QueryParameter, RepositoryListParams};
