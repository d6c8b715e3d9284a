//! Todotravel Test Utils
//!
//! Shared testing utilities for the todotravel server. The crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases with the tables a test
//! needs, plus factories for inserting rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for every entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_plan_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_plan_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let owner = test_utils::factory::create_user(db).await?;
//!     let plan = test_utils::factory::create_plan(db, owner.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
