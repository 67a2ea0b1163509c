//! Gateways to remote services.

mod geosearch;

pub use self::geosearch::*;
