//! Canvas API crate.
//!
//! Contains functions to communicate with the Canvas LMS REST API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod canvas;
mod errors;
mod link;
mod pages;

pub use canvas::CanvasApiService;
pub use errors::CanvasApiError;
