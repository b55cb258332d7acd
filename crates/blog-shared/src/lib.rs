//! # Blog Shared
//!
//! Wire types shared between the API server and its clients.

pub mod dto;
pub mod pagination;
pub mod response;

pub use pagination::{PageMeta, Paginated};
pub use response::ErrorResponse;
