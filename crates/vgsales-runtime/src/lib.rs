//! Runtime layer for the vgsales dashboard.
//!
//! Owns the load-once dataset lifecycle: the snapshot is populated by a
//! single asynchronous load and then shared read-only with every
//! aggregation call.

pub mod dataset_manager;
