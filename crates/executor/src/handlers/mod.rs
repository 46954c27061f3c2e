//! Command handlers.
//!
//! Each handler runs one operation against a borrowed [`DocumentStore`] and
//! packages the outcome as an [`Output`](crate::Output) record.
//!
//! [`DocumentStore`]: vault_engine::DocumentStore

pub mod clear;
pub mod delete;
pub mod read;
pub mod write;
