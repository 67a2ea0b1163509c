//! # locator-core
//!
//! Everything needed to resolve "which locations are near this entity"
//! without knowing how requests are sent or how markup is produced.

#![deny(missing_debug_implementations)]

pub mod error;
pub mod filter;
pub mod gateways;
pub mod geo;
pub mod nearby;
pub mod usecases;

pub use locator_boundary as boundary;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
