//! Text reports comparing benchmark runs
//!
//! A report line describes one [`Measurement`] and, when a measurement of the
//! same name exists in an earlier run, the signed percentage change since then.
//! Lines are collected into a Markdown comment body by [`comment_body`], which
//! is what gets posted back to GitHub.
//!
//! Everything here is pure string formatting; posting is done by the hosting client.

mod comment;
mod measurement;
mod test_report;

pub use comment::comment_body;
pub use measurement::Measurement;
pub use test_report::{format_delta, format_report};
