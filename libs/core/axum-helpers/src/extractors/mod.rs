//! Request extractors that reject with [`AppError`](crate::errors::AppError)
//! instead of axum's plain-text rejections.

pub mod json_body;
pub mod path_param;

pub use json_body::JsonBody;
pub use path_param::non_empty_path_param;
