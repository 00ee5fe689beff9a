//! Database repository layer.
//!
//! Repositories own the SeaORM queries and convert entity rows into domain
//! models at the boundary, keeping persistence details out of the service
//! layer. The job store lives in the shared database so that the process
//! completing a fetch does not have to be the process answering the poll.

pub mod guild_fetch_job;
