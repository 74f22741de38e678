//! Application error types

mod app_error;

pub use app_error::{
    AppError, ErrorResponse, DATABASE_ERROR_MESSAGE, INTERNAL_ERROR_MESSAGE,
};
