mod error;

pub mod models;
pub mod rest;

pub use error::{Error, Result};
