//! Builder Models

use posy::{
    builder::{BouquetBuilder, Selection},
    money::MinorUnits,
};

/// The builder's current selection with derived totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSummary {
    pub selections: Vec<Selection>,
    pub stem_count: u64,
    pub total: MinorUnits,
}

impl From<&BouquetBuilder> for BuilderSummary {
    fn from(builder: &BouquetBuilder) -> Self {
        Self {
            selections: builder.selections().to_vec(),
            stem_count: builder.stem_count(),
            total: builder.total(),
        }
    }
}
