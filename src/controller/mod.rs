//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, translate transport
//! concerns (query parameters, cookies) into service inputs and convert
//! domain results into DTOs.

pub mod guild;
