pub mod classification;
pub mod user_role;

pub use classification::Classification;
pub use user_role::UserRole;
