//! One pass of the metrics pipeline: transcript → usage → cost/performance → badge.

use std::path::Path;

use crate::badge::{BadgeLevel, classify};
use crate::config::RenderConfig;
use crate::cost::calculate_cost;
use crate::models::{TranscriptRecord, UsageTotals};
use crate::perf::{PerformanceMetrics, analyze_performance};
use crate::transcript::{LineWarning, load_transcript};
use crate::usage::aggregate_usage;

#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    pub record_count: usize,
    pub warnings: Vec<LineWarning>,
    pub usage: UsageTotals,
    pub perf: PerformanceMetrics,
    pub cost: f64,
    /// Present once at least one prompt/reply pair was timed.
    pub badge: Option<BadgeLevel>,
}

impl SessionReport {
    pub fn build(
        transcript: Option<&Path>,
        model_id: Option<&str>,
        config: &RenderConfig,
    ) -> Self {
        let load = load_transcript(transcript);
        let mut report = Self::from_records(&load.records, model_id, config);
        report.warnings = load.warnings;
        report
    }

    /// `model_id` is the hook's id; without one the last model named in the transcript is
    /// priced instead.
    pub fn from_records(
        records: &[TranscriptRecord],
        model_id: Option<&str>,
        config: &RenderConfig,
    ) -> Self {
        let usage = aggregate_usage(records);
        let perf = analyze_performance(records, &usage);
        let transcript_model = records.iter().rev().find_map(|r| r.model.as_deref());
        let cost = calculate_cost(&usage, model_id.or(transcript_model));
        let badge = perf.avg_response_time.map(|latency| {
            classify(
                perf.cache_hit_rate,
                latency,
                &config.cache_thresholds,
                &config.response_thresholds,
            )
        });
        Self {
            record_count: records.len(),
            warnings: Vec::new(),
            usage,
            perf,
            cost,
            badge,
        }
    }

    /// Transcript-derived fields render only when the transcript had records.
    pub fn has_transcript_data(&self) -> bool {
        self.record_count > 0
    }
}
