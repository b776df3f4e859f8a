//! # gantry-store-redis
//!
//! Redis cache adapter for gantry services.
//! The cache is optional equipment: servers boot with or without one
//! depending on configuration.

mod error;
pub mod store;

pub use error::CacheError;
pub use store::CacheStore;
