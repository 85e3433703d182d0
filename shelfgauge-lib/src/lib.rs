#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for shelfgauge
//!
//! shelfgauge keeps benchmark results reported by CI for each commit of a
//! repository and reports how they changed, as comments on GitHub commits.
//!
//! # Module Organization
//!
//! - [`serializer`]: Declarative mapping between records and JSON
//! - [`entity`]: Records kept by the backend
//! - [`api`]: JSON API handlers
//! - [`hosting`]: GitHub client and wire types
//! - [`reports`]: Percentage-delta report formatting
//! - `commands`: Command-line interface

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod api;
pub mod entity;
pub mod hosting;
pub mod reports;
pub mod serializer;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub use crate::commands::{Host, run};
