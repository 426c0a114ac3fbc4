// User registry: who may log in, with which accounts and password

pub mod error;
pub mod registry;
pub mod user;

pub use registry::{UserDatabase, UserRegistry};
pub use user::User;
