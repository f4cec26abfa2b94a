//! Terminal output for the gate.
//!
//! The gate is non-interactive, so this is formatting only: status lines,
//! the verdict, and the mismatch report the pipeline log will show.

pub mod formatter;

pub use formatter::{
    display_artifacts, display_error, display_outcome, display_status, display_success,
    display_warning,
};
