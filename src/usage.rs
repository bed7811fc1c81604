//! # Usage Module
//!
//! Sums token usage across transcript records.

use crate::models::{TranscriptRecord, UsageTotals};

pub fn aggregate_usage(records: &[TranscriptRecord]) -> UsageTotals {
    records
        .iter()
        .filter_map(TranscriptRecord::usage)
        .fold(UsageTotals::default(), |mut acc, u| {
            acc += *u;
            acc
        })
}
