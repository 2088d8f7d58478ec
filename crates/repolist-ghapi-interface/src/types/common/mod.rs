mod branch;
mod repository;
mod user;

pub use branch::{GhBranch, GhCommitRef};
pub use repository::GhRepository;
pub use user::GhUser;
