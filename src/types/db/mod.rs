pub mod category;
pub mod program;
pub mod user;

pub use program::InterestLevel;
pub use user::Role;
