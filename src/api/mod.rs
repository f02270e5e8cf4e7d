//! Request adapter, response sink and the Lambda entry point.

pub mod handler;
pub mod helpers;
pub mod response;

pub use handler::{Adapter, function_handler};
