//! HTTP surface of the access model.

mod access;
pub mod error;
pub mod extract;
mod health;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use extract::{ApiJson, ApiQuery};
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
