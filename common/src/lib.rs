//! # Seedtray Common
//!
//! Shared vocabulary of the workspace: the data model handed between the
//! core algorithms and the terminal front-end, the error taxonomy and the
//! runtime [`config::Config`].

pub mod config;
pub mod error;
pub mod models;

pub use error::{Result, StudyError};
