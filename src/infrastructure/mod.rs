//! Infrastructure layer: concrete adapters for the external store.

pub mod persistence;
