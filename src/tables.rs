// =============================================================================
// tables.rs — THE READ-ONLY CONTEXT
// =============================================================================
//
// The synonym table, category clusters and promotional patterns travel
// together in one immutable bundle. Build it once, wrap it in an Arc, hand it
// to the catalog and the matcher. No call ever writes to it, so any number of
// concurrent matches can share it without a lock.
// =============================================================================

use std::sync::Arc;

use crate::clusters::CategoryClusters;
use crate::promo::PromotionalPatternSet;
use crate::synonyms::SynonymTable;

#[derive(Debug, Clone)]
pub struct MatchTables {
    pub synonyms: SynonymTable,
    pub clusters: CategoryClusters,
    pub promotional: PromotionalPatternSet,
}

impl MatchTables {
    pub fn new(
        synonyms: SynonymTable,
        clusters: CategoryClusters,
        promotional: PromotionalPatternSet,
    ) -> Self {
        Self {
            synonyms,
            clusters,
            promotional,
        }
    }

    /// The shipped tables, ready to share.
    pub fn builtin() -> Arc<Self> {
        Arc::new(Self::new(
            SynonymTable::builtin(),
            CategoryClusters::builtin(),
            PromotionalPatternSet::builtin(),
        ))
    }
}
