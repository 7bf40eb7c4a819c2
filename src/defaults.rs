//! Values used when the command line or a project file doesn't say otherwise

pub const TITLE: &str = "Some Title";
pub const X_LABEL: &str = "x";
pub const Y_LABEL: &str = "y";
pub const X_UNCERTAINTY: f64 = 0.01;
pub const Y_UNCERTAINTY: f64 = 0.01;

/// Version of the project file layout written by this program.
pub const PROJECT_VERSION: &str = "1";
pub const CREATOR: &str = concat!("plotfit v", env!("CARGO_PKG_VERSION"));
