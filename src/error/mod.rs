// Presenting problems with input files to the user

mod display;

pub use display::*;
