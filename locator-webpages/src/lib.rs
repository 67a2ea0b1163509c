//! Markup of the locator pages.

mod card;
mod nearby;
mod page;

pub use self::{card::*, nearby::*, page::*};
