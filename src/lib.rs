pub mod artifact;
pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod manifest;
pub mod refsource;
pub mod ui;
pub mod validator;

pub use error::{ReleaseGateError, Result};
pub use validator::{validate, ValidationResult};
