//! bm-core: Core library for the bucket-mirror migration tool
//!
//! This crate provides the SDK-independent parts of a bucket migration:
//! - Configuration loading (bucket pairs)
//! - Qualified object references
//! - ObjectStore trait for the storage operations used
//! - Enumeration, server-side copy and run orchestration
//!
//! The AWS SDK lives behind the ObjectStore trait in bm-s3, so everything
//! here can be exercised against in-memory stores.

pub mod config;
pub mod driver;
pub mod enumerate;
pub mod error;
pub mod migrate;
pub mod path;
pub mod traits;

pub use config::{BucketPair, ConfigLoader, DEFAULT_CONFIG_PATH, MigrationConfig};
pub use driver::{Driver, RunSummary};
pub use enumerate::list_bucket;
pub use error::{Error, Phase, Result};
pub use migrate::{CopyOptions, DEFAULT_CONCURRENCY, KeyMode, copy_all};
pub use path::QualifiedRef;
pub use traits::{ListPage, NoProgress, ObjectStore, Progress};
