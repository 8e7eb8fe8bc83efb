//! Catalog Handlers

pub(crate) mod bouquets;
pub(crate) mod flowers;
pub(crate) mod product;
