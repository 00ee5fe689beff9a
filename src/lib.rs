//! Voiceboard server backend.
//!
//! Backend API for the voiceboard dashboard, where signed-in users manage
//! the pronunciation dictionaries of their voice bot. The interesting part
//! is the guild list subsystem: Discord's `/users/@me/guilds` route is
//! aggressively rate limited, so the resolved list is cached in a
//! caller-owned cookie and refreshed through detached background jobs that
//! the dashboard polls.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and API DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access, auth guard and the cache cookie codec
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, fetch policy)
//! - **Startup** (`startup`) - Initialization of database, sessions, and HTTP client
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron job reclaiming old fetch job rows
//!
//! # Request Flow
//!
//! A typical guild list request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes it to the guild controller
//! 2. **Middleware** resolves the caller identity from the session and decodes the cache cookie
//! 3. **Controller** converts transport inputs and calls the guild list service
//! 4. **Service** serves from cache, or persists a pending job and spawns the detached fetch
//! 5. **Data** records the job lifecycle in the shared database
//! 6. **Controller** converts the outcome to a DTO, attaching a fresh cache cookie when a job finished

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
