//! Application layer: page-oriented services and their error policy.

pub mod services;
