//! # Badge Module
//!
//! Four-level health badge from cache-hit rate and response latency. The worse of the two
//! dimensions decides the level.

use std::fmt;
use std::str::FromStr;

/// Three cutoffs for the green, yellow and orange levels. Anything past the last cutoff is red.
///
/// Rate cutoffs are read in descending order (higher is better), latency cutoffs in
/// ascending order (lower is better).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds(pub [f64; 3]);

impl Thresholds {
    pub const CACHE_DEFAULT: Thresholds = Thresholds([60.0, 40.0, 20.0]);
    pub const RESPONSE_DEFAULT: Thresholds = Thresholds([3.0, 5.0, 8.0]);
}

impl FromStr for Thresholds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!(
                "expected 3 comma-separated numbers, got {}",
                parts.len()
            ));
        }
        let mut out = [0.0; 3];
        for (slot, part) in out.iter_mut().zip(&parts) {
            let v: f64 = part
                .parse()
                .map_err(|_| format!("'{part}' is not a number"))?;
            if !v.is_finite() {
                return Err(format!("'{part}' is not a finite number"));
            }
            *slot = v;
        }
        Ok(Thresholds(out))
    }
}

impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a},{b},{c}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BadgeLevel {
    Green = 0,
    Yellow = 1,
    Orange = 2,
    Red = 3,
}

impl BadgeLevel {
    fn from_index(i: usize) -> Self {
        match i {
            0 => Self::Green,
            1 => Self::Yellow,
            2 => Self::Orange,
            _ => Self::Red,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Four positions, the filled one marking the level.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Green => "●○○○",
            Self::Yellow => "○●○○",
            Self::Orange => "○○●○",
            Self::Red => "○○○●",
        }
    }
}

/// Level of a cache-hit rate in [0, 1] against percentage cutoffs.
pub fn cache_level(hit_rate: f64, t: &Thresholds) -> BadgeLevel {
    let pct = hit_rate * 100.0;
    let idx = t.0.iter().position(|&cut| pct >= cut).unwrap_or(3);
    BadgeLevel::from_index(idx)
}

/// Level of an average response latency in seconds.
pub fn response_level(latency: f64, t: &Thresholds) -> BadgeLevel {
    let idx = t.0.iter().position(|&cut| latency <= cut).unwrap_or(3);
    BadgeLevel::from_index(idx)
}

pub fn classify(
    hit_rate: f64,
    latency: f64,
    cache: &Thresholds,
    response: &Thresholds,
) -> BadgeLevel {
    cache_level(hit_rate, cache).max(response_level(latency, response))
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Thresholds = Thresholds::CACHE_DEFAULT;
    const R: Thresholds = Thresholds::RESPONSE_DEFAULT;

    #[test]
    fn cache_levels_at_cutoffs() {
        assert_eq!(cache_level(0.60, &C), BadgeLevel::Green);
        assert_eq!(cache_level(0.59, &C), BadgeLevel::Yellow);
        assert_eq!(cache_level(0.40, &C), BadgeLevel::Yellow);
        assert_eq!(cache_level(0.20, &C), BadgeLevel::Orange);
        assert_eq!(cache_level(0.19, &C), BadgeLevel::Red);
        assert_eq!(cache_level(0.0, &C), BadgeLevel::Red);
    }

    #[test]
    fn response_levels_at_cutoffs() {
        assert_eq!(response_level(3.0, &R), BadgeLevel::Green);
        assert_eq!(response_level(3.01, &R), BadgeLevel::Yellow);
        assert_eq!(response_level(5.0, &R), BadgeLevel::Yellow);
        assert_eq!(response_level(8.0, &R), BadgeLevel::Orange);
        assert_eq!(response_level(8.5, &R), BadgeLevel::Red);
    }

    #[test]
    fn worse_dimension_wins() {
        assert_eq!(classify(0.9, 9.0, &C, &R), BadgeLevel::Red);
        assert_eq!(classify(0.1, 1.0, &C, &R), BadgeLevel::Red);
        assert_eq!(classify(0.5, 1.0, &C, &R), BadgeLevel::Yellow);
        assert_eq!(classify(0.9, 1.0, &C, &R), BadgeLevel::Green);
    }

    #[test]
    fn monotone_in_each_dimension() {
        let rates: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let latencies: Vec<f64> = (0..=40).map(|i| i as f64 * 0.25).collect();
        for &lat in &latencies {
            for w in rates.windows(2) {
                assert!(classify(w[1], lat, &C, &R) <= classify(w[0], lat, &C, &R));
            }
        }
        for &rate in &rates {
            for w in latencies.windows(2) {
                assert!(classify(rate, w[1], &C, &R) >= classify(rate, w[0], &C, &R));
            }
        }
    }

    #[test]
    fn glyphs_mark_one_position() {
        for (i, level) in [
            BadgeLevel::Green,
            BadgeLevel::Yellow,
            BadgeLevel::Orange,
            BadgeLevel::Red,
        ]
        .into_iter()
        .enumerate()
        {
            let g: Vec<char> = level.glyph().chars().collect();
            assert_eq!(g.len(), 4);
            assert_eq!(g.iter().filter(|&&c| c == '●').count(), 1);
            assert_eq!(g[i], '●');
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn parse_thresholds() {
        assert_eq!("60,40,20".parse::<Thresholds>().unwrap(), C);
        assert_eq!(
            " 2.5, 4 ,10".parse::<Thresholds>().unwrap(),
            Thresholds([2.5, 4.0, 10.0])
        );
        assert!("60,40".parse::<Thresholds>().is_err());
        assert!("60,40,20,10".parse::<Thresholds>().is_err());
        assert!("60,forty,20".parse::<Thresholds>().is_err());
        assert!("".parse::<Thresholds>().is_err());
        assert!("1,2,inf".parse::<Thresholds>().is_err());
        assert_eq!(R.to_string(), "3,5,8");
    }
}
