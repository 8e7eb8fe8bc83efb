//! Builder Handlers

pub(crate) mod commit;
pub(crate) mod get;
