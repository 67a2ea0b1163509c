mod directory_card;
mod nearby;

pub use self::{directory_card::*, nearby::*};
