//! Application-wide HTTP middleware.

pub mod tracing;
