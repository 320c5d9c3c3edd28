//! This is the main file to house data collection functions.

pub mod command;
pub mod error;
pub mod memory;

pub use self::{
    command::{CommandRunner, SystemCommandRunner},
    error::{CollectionError, CollectionResult},
};
