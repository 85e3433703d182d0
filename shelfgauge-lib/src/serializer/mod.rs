//! Declarative mapping between typed records and JSON
//!
//! This module converts in-memory entity records to JSON API bodies and back
//! without relying on serde derives, so that one record type can be exposed
//! through several differently-shaped definitions and so that missing fields
//! stay missing in both directions.
//!
//! # Implementation Model
//!
//! An [`ObjectSerializer`] is an ordered list of fields. Each field pairs a
//! JSON key with a [`Transform`] plus a getter/setter pair on the record. The
//! set of transforms is closed:
//!
//! - [`StringTransform`], [`BooleanTransform`] and [`NumberTransform`] coerce
//!   primitive values the permissive way (a non-numeric string becomes `NaN`
//!   rather than an error)
//! - [`DateTransform`] writes ISO-8601 UTC timestamps with millisecond precision
//! - [`ObjectSerializer`] itself, for a single nested record
//! - [`ArraySerializer`], for an ordered list of nested records
//!
//! A field whose getter returns `None` is left out of the JSON output, and a
//! key that is absent (or `null`) in the JSON input leaves the record field
//! untouched. Blank records are produced by the factory function given to
//! [`ObjectSerializer::new`].
//!
//! Definitions hold no per-call state and are `Send + Sync`, so they are
//! typically built once inside a `LazyLock` and shared by every request.

mod array_serializer;
mod object_serializer;
mod transform;

pub use array_serializer::ArraySerializer;
pub use object_serializer::ObjectSerializer;
pub use transform::{BOOLEAN, BooleanTransform, DATE, DateTransform, NUMBER, NumberTransform, STRING, StringTransform, Transform};

/// A JSON-compatible value
pub type Json = serde_json::Value;
