//! Canvas LMS API interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
pub mod types;

pub use errors::{CanvasError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockCanvasService;
pub use interface::CanvasService;
