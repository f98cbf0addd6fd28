//! Command implementations for the featurekit CLI

pub mod completions;
pub mod helpers;
pub mod info;
pub mod install;
pub mod list;
pub mod uninstall;
pub mod version;
