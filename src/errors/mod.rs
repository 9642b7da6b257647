pub mod app_error;

pub use app_error::{AppError, EXIT_FATAL, EXIT_INVALID_STEP, EXIT_SUCCESS};
