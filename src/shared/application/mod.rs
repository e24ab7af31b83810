/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// multiple bounded contexts.
pub mod pagination;
pub mod service_response;
pub mod use_case;

pub use pagination::*;
pub use service_response::ServiceResponse;
pub use use_case::{Query, UseCase};
