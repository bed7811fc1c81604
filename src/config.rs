//! Resolved rendering options for one run.

use std::fmt;
use std::str::FromStr;

use crate::badge::Thresholds;
use crate::cli::Args;
use crate::error::{Result, StatuslineError};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Solarized,
    Nord,
    Dracula,
    Gruvbox,
    Tokyo,
    Catppuccin,
    Minimal,
    None,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// 1.2M, 3.4K, 999
    #[default]
    Compact,
    /// 1,234,567
    Full,
    /// 1234567
    Raw,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorStyle {
    Powerline,
    #[default]
    Simple,
    Arrows,
    Pipes,
    Dots,
}

impl SeparatorStyle {
    pub fn separator(self) -> &'static str {
        match self {
            Self::Powerline => " \u{e0b0} ",
            Self::Simple | Self::Pipes => " | ",
            Self::Arrows => " → ",
            Self::Dots => " • ",
        }
    }
}

/// Output fields, declared in the order they are always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Badge,
    Folder,
    Git,
    Model,
    PerfCacheRate,
    PerfResponseTime,
    PerfSessionTime,
    PerfTokenRate,
    PerfMessageCount,
    PerfAllMetrics,
    Input,
    Output,
    Cost,
}

impl Field {
    pub const CANONICAL: [Field; 13] = [
        Field::Badge,
        Field::Folder,
        Field::Git,
        Field::Model,
        Field::PerfCacheRate,
        Field::PerfResponseTime,
        Field::PerfSessionTime,
        Field::PerfTokenRate,
        Field::PerfMessageCount,
        Field::PerfAllMetrics,
        Field::Input,
        Field::Output,
        Field::Cost,
    ];

    pub const DEFAULT_SELECTION: [Field; 7] = [
        Field::Badge,
        Field::Folder,
        Field::Git,
        Field::Model,
        Field::Input,
        Field::Output,
        Field::Cost,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Badge => "badge",
            Field::Folder => "folder",
            Field::Git => "git",
            Field::Model => "model",
            Field::PerfCacheRate => "perf-cache-rate",
            Field::PerfResponseTime => "perf-response-time",
            Field::PerfSessionTime => "perf-session-time",
            Field::PerfTokenRate => "perf-token-rate",
            Field::PerfMessageCount => "perf-message-count",
            Field::PerfAllMetrics => "perf-all-metrics",
            Field::Input => "input",
            Field::Output => "output",
            Field::Cost => "cost",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Field::CANONICAL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown field '{s}'"))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a comma-separated field list. Unknown names are skipped with a warning; blank
/// input selects the default fields.
pub fn parse_fields(list: &str) -> Vec<Field> {
    let mut fields = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match name.parse::<Field>() {
            Ok(f) if !fields.contains(&f) => fields.push(f),
            Ok(_) => {}
            Err(e) => tracing::warn!("ignoring {e}"),
        }
    }
    if fields.is_empty() && list.trim().is_empty() {
        return Field::DEFAULT_SELECTION.to_vec();
    }
    fields
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub theme: Theme,
    pub numbers: NumberFormat,
    pub style: SeparatorStyle,
    pub emoji: bool,
    pub cache_thresholds: Thresholds,
    pub response_thresholds: Thresholds,
    /// Selected fields in the order given; output order is always canonical.
    pub fields: Vec<Field>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            numbers: NumberFormat::Compact,
            style: SeparatorStyle::Simple,
            emoji: true,
            cache_thresholds: Thresholds::CACHE_DEFAULT,
            response_thresholds: Thresholds::RESPONSE_DEFAULT,
            fields: Field::DEFAULT_SELECTION.to_vec(),
        }
    }
}

impl RenderConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let cache_thresholds = args.perf_cache.parse::<Thresholds>().map_err(|reason| {
            StatuslineError::InvalidThresholds {
                which: "cache",
                reason,
            }
        })?;
        let response_thresholds = args.perf_response.parse::<Thresholds>().map_err(|reason| {
            StatuslineError::InvalidThresholds {
                which: "response",
                reason,
            }
        })?;
        let fields = match args.fields.as_deref() {
            Some(list) => parse_fields(list),
            None => Field::DEFAULT_SELECTION.to_vec(),
        };
        Ok(Self {
            theme: args.theme,
            numbers: args.numbers,
            style: args.style,
            emoji: !args.no_emoji,
            cache_thresholds,
            response_thresholds,
            fields,
        })
    }

    pub fn shows(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}
