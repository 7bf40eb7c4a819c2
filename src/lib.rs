pub mod defaults;
pub mod error;
pub mod fitting;
pub mod language;
pub mod output;
pub mod parsing;
pub mod project;
