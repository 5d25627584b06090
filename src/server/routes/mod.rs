mod categories;
mod questions;

pub use categories::category_router;
pub use questions::questions_router;

use super::error::ApiError;

pub type ApiResponse<T> = Result<T, ApiError>;
