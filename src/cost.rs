//! Session cost from usage totals and the pricing table.
//!
//! Cache writes are always billed at the 5-minute tier; transcripts do not say which tier a
//! write used.

use crate::models::UsageTotals;
use crate::pricing::pricing_for_model;

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Cost in USD. Unknown or absent model ids cost exactly 0.0.
pub fn calculate_cost(totals: &UsageTotals, model_id: Option<&str>) -> f64 {
    let Some(p) = model_id.and_then(pricing_for_model) else {
        return 0.0;
    };
    (totals.input as f64 * p.input
        + totals.cache_creation as f64 * p.cache_write_5m
        + totals.cache_read as f64 * p.cache_read
        + totals.output as f64 * p.output)
        / TOKENS_PER_MILLION
}

/// Formats a cost as `$X.YY` from one dollar up, otherwise as whole cents (`48¢`).
///
/// Rounds half away from zero to whole cents before choosing the branch, so 0.995 renders
/// as `$1.00` rather than `100¢`.
pub fn format_cost(cost: f64) -> String {
    if !cost.is_finite() || cost <= 0.0 {
        return "0¢".to_string();
    }
    let cents = (cost * 100.0).round();
    if cents >= 100.0 {
        format!("${:.2}", cents / 100.0)
    } else {
        format!("{}¢", cents as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONNET_4: &str = "claude-sonnet-4-20250514";

    #[test]
    fn weighted_sum_per_million() {
        let totals = UsageTotals {
            input: 1000,
            output: 500,
            cache_creation: 0,
            cache_read: 0,
        };
        let cost = calculate_cost(&totals, Some(SONNET_4));
        assert!((cost - 0.0105).abs() < 1e-12);

        let totals = UsageTotals {
            input: 2_000,
            output: 10_000,
            cache_creation: 40_000,
            cache_read: 1_000_000,
        };
        let expected = (2_000.0 * 3.0 + 40_000.0 * 3.75 + 1_000_000.0 * 0.3 + 10_000.0 * 15.0)
            / 1_000_000.0;
        let cost = calculate_cost(&totals, Some(SONNET_4));
        assert!((cost - expected).abs() < 1e-12);
    }

    #[test]
    fn unknown_model_is_free() {
        let totals = UsageTotals {
            input: 1_000_000,
            output: 1_000_000,
            cache_creation: 1_000_000,
            cache_read: 1_000_000,
        };
        assert_eq!(calculate_cost(&totals, Some("gpt-unknown")), 0.0);
        assert_eq!(calculate_cost(&totals, None), 0.0);
    }

    #[test]
    fn uses_five_minute_cache_write_rate() {
        let totals = UsageTotals {
            cache_creation: 1_000_000,
            ..UsageTotals::default()
        };
        let cost = calculate_cost(&totals, Some("claude-opus-4-1-20250805"));
        assert!((cost - 18.75).abs() < 1e-9);
    }

    #[test]
    fn cents_below_a_dollar() {
        assert_eq!(format_cost(0.0), "0¢");
        assert_eq!(format_cost(0.48), "48¢");
        assert_eq!(format_cost(0.0105), "1¢");
        assert_eq!(format_cost(0.004), "0¢");
    }

    #[test]
    fn half_cent_rounds_away_from_zero() {
        assert_eq!(format_cost(0.005), "1¢");
        assert_eq!(format_cost(0.125), "13¢");
    }

    #[test]
    fn dollar_boundary_rounds_first() {
        assert_eq!(format_cost(0.995), "$1.00");
        assert_eq!(format_cost(0.999999), "$1.00");
        assert_eq!(format_cost(1.0), "$1.00");
        // 1.005 is stored just below the half, so it stays at $1.00
        assert_eq!(format_cost(1.005), "$1.00");
        assert_eq!(format_cost(12.345), "$12.35");
    }

    #[test]
    fn nonsense_costs_render_as_zero() {
        assert_eq!(format_cost(-3.0), "0¢");
        assert_eq!(format_cost(f64::NAN), "0¢");
        assert_eq!(format_cost(f64::INFINITY), "0¢");
    }
}
