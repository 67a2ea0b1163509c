//! The nearby locations widget: which locations are close to the
//! entity a page is rendered for.

mod config;
mod props;
mod query;
pub(crate) mod results;
mod static_map;
mod view;
mod widget;

pub use self::{config::*, props::*, query::*, results::*, static_map::*, view::*, widget::*};
