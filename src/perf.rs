//! # Performance Module
//!
//! Derives response latency, generation rate, message count and session span from transcript
//! timestamps, and the cache-hit rate from usage totals.
//!
//! ## Pairing
//!
//! The n-th assistant timestamp is paired with the n-th user timestamp by position. A reply
//! that arrives before its paired prompt (clock skew between writers) is dropped.
//!
//! ## Generation rate
//!
//! Transcripts only carry completion timestamps, so the whole prompt-to-reply latency stands
//! in for generation time. Rates therefore read low for replies that spent time thinking or
//! running tools.

use chrono::{DateTime, Utc};

use crate::models::{TranscriptRecord, UsageTotals};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceMetrics {
    /// cache_read / (input + cache_creation + cache_read), in [0, 1]
    pub cache_hit_rate: f64,
    /// Mean latency over accepted pairs, seconds
    pub avg_response_time: Option<f64>,
    /// Mean of per-pair output rates, tokens per second
    pub avg_token_rate: Option<f64>,
    /// Parsed user timestamps
    pub message_count: usize,
    /// Span between earliest and latest timestamp, seconds
    pub session_duration: Option<f64>,
    pub response_samples: usize,
    pub rate_samples: usize,
}

pub fn cache_hit_rate(totals: &UsageTotals) -> f64 {
    let denom = totals.input_side();
    if denom == 0 {
        0.0
    } else {
        totals.cache_read as f64 / denom as f64
    }
}

pub fn analyze_performance(
    records: &[TranscriptRecord],
    totals: &UsageTotals,
) -> PerformanceMetrics {
    let mut users: Vec<DateTime<Utc>> = Vec::new();
    let mut assistants: Vec<DateTime<Utc>> = Vec::new();
    let mut latencies: Vec<f64> = Vec::new();
    let mut rates: Vec<f64> = Vec::new();

    for record in records {
        let Some(ts) = record.timestamp else {
            continue;
        };
        if record.is_user() {
            users.push(ts);
        } else if record.is_assistant() {
            assistants.push(ts);
            let n = assistants.len();
            if users.len() < n {
                continue;
            }
            let latency = seconds_between(users[n - 1], ts);
            if latency < 0.0 {
                tracing::debug!(reply = n, latency, "dropping reply timestamped before its prompt");
                continue;
            }
            latencies.push(latency);
            let output = record.message_usage.map(|u| u.output).unwrap_or(0);
            if output > 0 && latency > 0.0 {
                rates.push(output as f64 / latency);
            }
        }
    }

    let session_duration = {
        let all = users.iter().chain(assistants.iter());
        match (all.clone().min(), all.max()) {
            (Some(first), Some(last)) if users.len() + assistants.len() >= 2 => {
                Some(seconds_between(*first, *last))
            }
            _ => None,
        }
    };

    PerformanceMetrics {
        cache_hit_rate: cache_hit_rate(totals),
        avg_response_time: mean(&latencies),
        avg_token_rate: mean(&rates),
        message_count: users.len(),
        session_duration,
        response_samples: latencies.len(),
        rate_samples: rates.len(),
    }
}

fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let delta = end - start;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}
