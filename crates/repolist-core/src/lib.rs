//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::repositories::get_user_repositories::GetUserRepositories;

module! {
    pub CoreModule {
        components = [GetUserRepositories],
        providers = []
    }
}
