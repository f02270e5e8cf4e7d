//! Configuration and wire types shared by the adapter and the wrapped application.

pub mod config;
pub mod models;
