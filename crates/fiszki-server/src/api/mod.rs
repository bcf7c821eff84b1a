pub mod error;
pub mod handlers;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
