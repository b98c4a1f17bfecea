// Services layer - business logic orchestration

pub mod admin_service;
pub mod auth_service;
pub mod crypto;
pub mod recommendation;
pub mod validation;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use recommendation::{recommend, Recommendation, RecommendationInput};
