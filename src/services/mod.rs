pub mod api_client;
pub mod auth_service;
pub mod sale_service;

pub use api_client::{extract_error_detail, ApiClient, ApiError};
pub use auth_service::{authorize, check_auth, logoff, AuthCheckResult};
pub use sale_service::register_sale;
