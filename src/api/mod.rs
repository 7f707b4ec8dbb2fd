pub mod dto;
pub mod error;
pub mod handlers;
pub mod pagination;
pub mod routes;

pub use dto::*;
pub use error::ApiError;
pub use pagination::{QUESTIONS_PER_PAGE, paginate};
pub use routes::{AppState, create_router};
