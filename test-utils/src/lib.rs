//! Voiceboard Test Utils
//!
//! Shared testing utilities for the voiceboard service. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases
//! and customizable table schemas, plus factories for seeding guild fetch
//! job rows.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildFetchJob;
//!
//! #[tokio::test]
//! async fn test_job_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildFetchJob)
//!         .build()
//!         .await?;
//!
//!     let db = &test.db;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
