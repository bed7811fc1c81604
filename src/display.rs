//! # Display Module
//!
//! Assembles the statusline from the selected fields.
//!
//! Fields are always emitted in [`Field::CANONICAL`] order, whatever order they were selected
//! in. A field whose data is missing is left out entirely rather than rendered empty.

use std::env;

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

use crate::badge::BadgeLevel;
use crate::config::{Field, RenderConfig, Theme};
use crate::cost::format_cost;
use crate::models::GitInfo;
use crate::report::SessionReport;
use crate::utils::{folder_name, format_duration, format_number};

/// Everything the renderer reads besides the config.
pub struct StatusContext<'a> {
    pub model_name: &'a str,
    pub cwd: Option<&'a str>,
    pub git: Option<&'a GitInfo>,
    pub report: &'a SessionReport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

#[derive(Clone, Copy, Debug)]
struct Palette {
    folder: Rgb,
    git: Rgb,
    model: Rgb,
    perf: Rgb,
    tokens: Rgb,
    cost: Rgb,
    separator: Rgb,
    /// Badge tint by level, green to red
    levels: [Rgb; 4],
}

const LEVELS: [Rgb; 4] = [
    Rgb(80, 200, 120),
    Rgb(230, 200, 60),
    Rgb(240, 140, 40),
    Rgb(230, 70, 70),
];

fn palette(theme: Theme) -> Option<Palette> {
    let p = match theme {
        Theme::None => return None,
        Theme::Default => Palette {
            folder: Rgb(97, 175, 239),
            git: Rgb(152, 195, 121),
            model: Rgb(198, 120, 221),
            perf: Rgb(86, 182, 194),
            tokens: Rgb(229, 192, 123),
            cost: Rgb(224, 108, 117),
            separator: Rgb(92, 99, 112),
            levels: LEVELS,
        },
        Theme::Solarized => Palette {
            folder: Rgb(38, 139, 210),
            git: Rgb(133, 153, 0),
            model: Rgb(108, 113, 196),
            perf: Rgb(42, 161, 152),
            tokens: Rgb(181, 137, 0),
            cost: Rgb(220, 50, 47),
            separator: Rgb(88, 110, 117),
            levels: [
                Rgb(133, 153, 0),
                Rgb(181, 137, 0),
                Rgb(203, 75, 22),
                Rgb(220, 50, 47),
            ],
        },
        Theme::Nord => Palette {
            folder: Rgb(136, 192, 208),
            git: Rgb(163, 190, 140),
            model: Rgb(180, 142, 173),
            perf: Rgb(143, 188, 187),
            tokens: Rgb(235, 203, 139),
            cost: Rgb(191, 97, 106),
            separator: Rgb(76, 86, 106),
            levels: [
                Rgb(163, 190, 140),
                Rgb(235, 203, 139),
                Rgb(208, 135, 112),
                Rgb(191, 97, 106),
            ],
        },
        Theme::Dracula => Palette {
            folder: Rgb(139, 233, 253),
            git: Rgb(80, 250, 123),
            model: Rgb(189, 147, 249),
            perf: Rgb(255, 121, 198),
            tokens: Rgb(241, 250, 140),
            cost: Rgb(255, 85, 85),
            separator: Rgb(98, 114, 164),
            levels: [
                Rgb(80, 250, 123),
                Rgb(241, 250, 140),
                Rgb(255, 184, 108),
                Rgb(255, 85, 85),
            ],
        },
        Theme::Gruvbox => Palette {
            folder: Rgb(131, 165, 152),
            git: Rgb(184, 187, 38),
            model: Rgb(211, 134, 155),
            perf: Rgb(142, 192, 124),
            tokens: Rgb(250, 189, 47),
            cost: Rgb(251, 73, 52),
            separator: Rgb(146, 131, 116),
            levels: [
                Rgb(184, 187, 38),
                Rgb(250, 189, 47),
                Rgb(254, 128, 25),
                Rgb(251, 73, 52),
            ],
        },
        Theme::Tokyo => Palette {
            folder: Rgb(122, 162, 247),
            git: Rgb(158, 206, 106),
            model: Rgb(187, 154, 247),
            perf: Rgb(125, 207, 255),
            tokens: Rgb(224, 175, 104),
            cost: Rgb(247, 118, 142),
            separator: Rgb(86, 95, 137),
            levels: [
                Rgb(158, 206, 106),
                Rgb(224, 175, 104),
                Rgb(255, 158, 100),
                Rgb(247, 118, 142),
            ],
        },
        Theme::Catppuccin => Palette {
            folder: Rgb(137, 180, 250),
            git: Rgb(166, 227, 161),
            model: Rgb(203, 166, 247),
            perf: Rgb(148, 226, 213),
            tokens: Rgb(249, 226, 175),
            cost: Rgb(243, 139, 168),
            separator: Rgb(108, 112, 134),
            levels: [
                Rgb(166, 227, 161),
                Rgb(249, 226, 175),
                Rgb(250, 179, 135),
                Rgb(243, 139, 168),
            ],
        },
        Theme::Minimal => {
            let fg = Rgb(190, 190, 190);
            Palette {
                folder: fg,
                git: fg,
                model: fg,
                perf: fg,
                tokens: fg,
                cost: fg,
                separator: Rgb(110, 110, 110),
                levels: [fg; 4],
            }
        }
    };
    Some(p)
}

impl Palette {
    fn color_for(&self, field: Field, badge: Option<BadgeLevel>) -> Rgb {
        match field {
            Field::Badge => badge.map(|l| self.levels[l.index()]).unwrap_or(self.perf),
            Field::Folder => self.folder,
            Field::Git => self.git,
            Field::Model => self.model,
            Field::PerfCacheRate
            | Field::PerfResponseTime
            | Field::PerfSessionTime
            | Field::PerfTokenRate
            | Field::PerfMessageCount
            | Field::PerfAllMetrics => self.perf,
            Field::Input | Field::Output => self.tokens,
            Field::Cost => self.cost,
        }
    }
}

#[cfg(feature = "colors")]
fn paint(text: &str, color: Option<Rgb>) -> String {
    match color {
        Some(Rgb(r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

#[cfg(not(feature = "colors"))]
fn paint(text: &str, _color: Option<Rgb>) -> String {
    text.to_string()
}

fn active_palette(theme: Theme) -> Option<Palette> {
    // Respect NO_COLOR if set
    if env::var_os("NO_COLOR").is_some() {
        return None;
    }
    palette(theme)
}

pub fn render_line(config: &RenderConfig, ctx: &StatusContext<'_>) -> String {
    let palette = active_palette(config.theme);
    let separator = paint(config.style.separator(), palette.map(|p| p.separator));
    Field::CANONICAL
        .into_iter()
        .filter(|f| config.shows(*f))
        .filter_map(|f| {
            let text = render_field(f, config, ctx)?;
            Some(paint(&text, palette.map(|p| p.color_for(f, ctx.report.badge))))
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Plain text of one field, or `None` when its data is unavailable.
pub fn render_field(
    field: Field,
    config: &RenderConfig,
    ctx: &StatusContext<'_>,
) -> Option<String> {
    let report = ctx.report;
    let has_data = report.has_transcript_data();
    let perf = &report.perf;
    match field {
        Field::Badge => report.badge.map(|l| l.glyph().to_string()),
        Field::Folder => {
            let name = folder_name(ctx.cwd?)?;
            Some(labeled(config, "📁", "", name))
        }
        Field::Git => {
            let git = ctx.git?;
            let value = if git.dirty_files > 0 {
                format!("{} ({})", git.branch, git.dirty_files)
            } else {
                git.branch.clone()
            };
            Some(labeled(config, "🌿", "", value))
        }
        Field::Model => {
            let name = ctx.model_name.trim();
            (!name.is_empty()).then(|| labeled(config, "🤖", "", name.to_string()))
        }
        Field::PerfCacheRate => has_data.then(|| {
            labeled(
                config,
                "💾",
                "cache:",
                format!("{:.0}%", perf.cache_hit_rate * 100.0),
            )
        }),
        Field::PerfResponseTime => perf
            .avg_response_time
            .map(|secs| labeled(config, "⏱", "resp:", format_duration(secs))),
        Field::PerfSessionTime => perf
            .session_duration
            .map(|secs| labeled(config, "⏰", "session:", format_duration(secs))),
        Field::PerfTokenRate => perf
            .avg_token_rate
            .map(|rate| labeled(config, "⚙", "rate:", format!("{}t/s", rate.round() as u64))),
        Field::PerfMessageCount => {
            has_data.then(|| labeled(config, "💬", "msgs:", perf.message_count.to_string()))
        }
        Field::PerfAllMetrics => {
            let parts: Vec<String> = [
                Field::PerfCacheRate,
                Field::PerfResponseTime,
                Field::PerfSessionTime,
                Field::PerfTokenRate,
                Field::PerfMessageCount,
            ]
            .into_iter()
            .filter_map(|f| render_field(f, config, ctx))
            .collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        Field::Input => has_data.then(|| {
            labeled(
                config,
                "⬆",
                "in:",
                format_number(report.usage.input, config.numbers),
            )
        }),
        Field::Output => has_data.then(|| {
            labeled(
                config,
                "⬇",
                "out:",
                format_number(report.usage.output, config.numbers),
            )
        }),
        Field::Cost => has_data.then(|| labeled(config, "💰", "", format_cost(report.cost))),
    }
}

fn labeled(config: &RenderConfig, emoji: &str, label: &str, value: String) -> String {
    if config.emoji {
        format!("{emoji} {value}")
    } else if label.is_empty() {
        value
    } else {
        format!("{label} {value}")
    }
}
