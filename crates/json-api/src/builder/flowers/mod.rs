//! Builder Flowers

mod handlers;

pub(crate) use handlers::*;
