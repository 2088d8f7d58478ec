//! Client-facing models.

mod error_message;
mod repository;

pub use error_message::ErrorMessage;
pub use repository::{BranchDto, RepositoryDto, UserRepositoriesResponse};
