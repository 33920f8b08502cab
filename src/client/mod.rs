//! Glue API client.
//!
//! This module provides the [`GlueClient`] for talking to AWS Glue and the
//! conversions between SDK types and the workflow model.

mod convert;
mod glue;

pub use glue::GlueClient;
