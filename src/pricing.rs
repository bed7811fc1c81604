//! # Pricing Module
//!
//! Static per-model rates used by the cost calculator.
//!
//! ## Pricing Structure
//!
//! Each model has rates in USD per million tokens for:
//! - Input tokens
//! - Cache writes, 5-minute tier (1.25x input) and 1-hour tier (2x input)
//! - Cache reads (0.1x input)
//! - Output tokens
//!
//! Lookup is by exact model id. Ids that are not in the table have no price.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingEntry {
    pub input: f64,
    pub cache_write_5m: f64,
    pub cache_write_1h: f64,
    pub cache_read: f64,
    pub output: f64,
}

impl PricingEntry {
    /// Builds an entry from base input/output rates using the standard cache multipliers.
    const fn from_base(input: f64, output: f64) -> Self {
        Self {
            input,
            cache_write_5m: input * 1.25,
            cache_write_1h: input * 2.0,
            cache_read: input * 0.1,
            output,
        }
    }
}

const OPUS: PricingEntry = PricingEntry::from_base(15.0, 75.0);
const SONNET: PricingEntry = PricingEntry::from_base(3.0, 15.0);

static PRICING: Lazy<HashMap<&'static str, PricingEntry>> = Lazy::new(|| {
    HashMap::from([
        ("claude-opus-4-1-20250805", OPUS),
        ("claude-opus-4-20250514", OPUS),
        ("claude-3-opus-20240229", OPUS),
        ("claude-sonnet-4-20250514", SONNET),
        ("claude-3-7-sonnet-20250219", SONNET),
        ("claude-3-5-sonnet-20241022", SONNET),
        ("claude-3-5-sonnet-20240620", SONNET),
        (
            "claude-3-5-haiku-20241022",
            PricingEntry {
                input: 0.80,
                cache_write_5m: 1.00,
                cache_write_1h: 1.60,
                cache_read: 0.08,
                output: 4.00,
            },
        ),
        (
            "claude-3-haiku-20240307",
            PricingEntry {
                input: 0.25,
                cache_write_5m: 0.30,
                cache_write_1h: 0.50,
                cache_read: 0.03,
                output: 1.25,
            },
        ),
    ])
});

pub fn pricing_for_model(model_id: &str) -> Option<&'static PricingEntry> {
    PRICING.get(model_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_for_known_models() {
        let sonnet = pricing_for_model("claude-sonnet-4-20250514").unwrap();
        assert!((sonnet.input - 3.0).abs() < 1e-10);
        assert!((sonnet.output - 15.0).abs() < 1e-10);
        assert!((sonnet.cache_write_5m - 3.75).abs() < 1e-10);
        assert!((sonnet.cache_write_1h - 6.0).abs() < 1e-10);
        assert!((sonnet.cache_read - 0.3).abs() < 1e-10);

        let opus = pricing_for_model("claude-opus-4-1-20250805").unwrap();
        assert!((opus.input - 15.0).abs() < 1e-10);
        assert!((opus.output - 75.0).abs() < 1e-10);
        assert!((opus.cache_write_5m - 18.75).abs() < 1e-10);

        let haiku = pricing_for_model("claude-3-5-haiku-20241022").unwrap();
        assert!((haiku.input - 0.8).abs() < 1e-10);
        assert!((haiku.output - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(pricing_for_model("unknown-model").is_none());
        assert!(pricing_for_model("claude-sonnet-4").is_none());
        assert!(pricing_for_model("CLAUDE-SONNET-4-20250514").is_none());
        assert!(pricing_for_model("").is_none());
    }
}
