//! User repository module

#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockUserRepository;
pub use trait_::UserRepository;
