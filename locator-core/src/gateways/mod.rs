mod diagnostics;
mod geosearch;

pub use self::{diagnostics::*, geosearch::*};
