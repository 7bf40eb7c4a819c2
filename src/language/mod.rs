// Types representing measurement data sets and fitted lines

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
