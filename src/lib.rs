pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod render;
pub mod selector;
pub mod source;
pub mod ui;
pub mod validate;

pub use domain::{Category, Changelog, Release};
pub use error::{ChangelogError, Result};
pub use parser::parse_changelog;
pub use validate::{validate_changelog, validate_release};
