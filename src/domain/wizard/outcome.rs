//! What a qualification hands to its collaborators.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuoteId, Timestamp};
use crate::domain::pricing::PriceEstimate;
use crate::domain::record::FormRecord;
use crate::domain::summary::SummaryGroup;

/// A finished qualification, ready to be filed against its quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedRecord {
    pub quote_id: QuoteId,
    pub record: FormRecord,
    pub estimate: PriceEstimate,
    pub finished_at: Timestamp,
}

/// Review panels plus estimate, consumed by document and spreadsheet exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub quote_id: QuoteId,
    pub groups: Vec<SummaryGroup>,
    pub estimate: PriceEstimate,
}
