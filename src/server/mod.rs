//! Travel planning API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//! Plans, their itineraries, membership, social features, chat rooms and
//! notifications are all exposed as JSON endpoints under `/api`.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guards and OAuth2 session state
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - Tracing subscriber setup
//! - **State** (`state`) - Shared application state (DB, HTTP clients, token issuer)
//! - **Startup** (`startup`) - Initialization of database, sessions, and OAuth2 client
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs, currently the expired refresh token purge
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** authenticates the bearer token and checks plan permissions
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
