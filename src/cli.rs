use crate::config::{NumberFormat, SeparatorStyle, Theme};

/// Single-line performance statusline for Claude Code.
///
/// Reads the session JSON from stdin and prints one line. Every option can also be set through
/// the environment variable shown next to it.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Color theme
    #[arg(long, value_enum, env = "PERFLINE_THEME", default_value_t = Theme::Default)]
    pub theme: Theme,

    /// Number formatting for token counts
    #[arg(long, value_enum, env = "PERFLINE_NUMBERS", default_value_t = NumberFormat::Compact)]
    pub numbers: NumberFormat,

    /// Separator style between fields
    #[arg(long, value_enum, env = "PERFLINE_STYLE", default_value_t = SeparatorStyle::Simple)]
    pub style: SeparatorStyle,

    /// Use short text labels instead of emoji
    #[arg(long, env = "PERFLINE_NO_EMOJI")]
    pub no_emoji: bool,

    /// Cache hit rate cutoffs in percent for green,yellow,orange
    #[arg(long, env = "PERFLINE_PERF_CACHE", default_value = "60,40,20")]
    pub perf_cache: String,

    /// Response time cutoffs in seconds for green,yellow,orange
    #[arg(long, env = "PERFLINE_PERF_RESPONSE", default_value = "3,5,8")]
    pub perf_response: String,

    /// Comma-separated fields to show. Output order is fixed:
    /// badge,folder,git,model,perf-cache-rate,perf-response-time,perf-session-time,
    /// perf-token-rate,perf-message-count,perf-all-metrics,input,output,cost
    #[arg(env = "PERFLINE_FIELDS")]
    pub fields: Option<String>,

    /// Debug mode: log pipeline details to stderr
    #[arg(long, env = "PERFLINE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
