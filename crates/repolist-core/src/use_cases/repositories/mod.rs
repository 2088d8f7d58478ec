pub(crate) mod get_user_repositories;

pub use get_user_repositories::GetUserRepositoriesInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::get_user_repositories::MockGetUserRepositoriesInterface;
