//! tsetup core - bundle fetching and workspace configuration
//!
//! This crate provides the two stages behind the `tsetup` CLI: the
//! fetcher (download, extract, run the bundled setup script) and the
//! environment configurator (editor extensions, dependencies, config
//! files).

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod command;
pub mod defaults;
pub mod error;
pub mod fetch;
pub mod runtime;
pub mod setup;

pub use error::{SetupError, SetupResult};
pub use runtime::Runtime;
pub use setup::Setup;
