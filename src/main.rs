use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use claude_perfline::cli::Args;
use claude_perfline::config::RenderConfig;
use claude_perfline::display::{StatusContext, render_line};
use claude_perfline::error::StatuslineError;
use claude_perfline::models::HookJson;
use claude_perfline::report::SessionReport;
use claude_perfline::utils::{read_stdin, setup_tracing};

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(args.debug);
    match run(&args) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("claude_perfline error: {err:#}");
            let code = err
                .downcast_ref::<StatuslineError>()
                .map(StatuslineError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> Result<String> {
    // Configuration is validated before any input is read.
    let config = RenderConfig::from_args(args)?;
    let stdin = read_stdin().context("read session JSON")?;
    let hook: HookJson = serde_json::from_slice(&stdin)
        .map_err(StatuslineError::InvalidInput)
        .context("parse session JSON")?;

    let cwd: Option<String> = hook.working_dir().map(str::to_string).or_else(|| {
        std::env::current_dir()
            .ok()
            .map(|p| p.to_string_lossy().into_owned())
    });

    let report = SessionReport::build(hook.transcript().map(Path::new), hook.model_id(), &config);

    // Git info from cwd (feature-gated)
    let git_info = {
        #[cfg(feature = "git")]
        {
            if config.shows(claude_perfline::config::Field::Git) {
                cwd.as_deref()
                    .and_then(|dir| claude_perfline::git::read_git_info(Path::new(dir)))
            } else {
                None
            }
        }
        #[cfg(not(feature = "git"))]
        {
            None
        }
    };

    tracing::debug!(
        records = report.record_count,
        skipped_lines = report.warnings.len(),
        input = report.usage.input,
        output = report.usage.output,
        cache_creation = report.usage.cache_creation,
        cache_read = report.usage.cache_read,
        pairs = report.perf.response_samples,
        rate_samples = report.perf.rate_samples,
        cost = report.cost,
        git = ?git_info,
        "session metrics"
    );

    let ctx = StatusContext {
        model_name: &hook.model.display_name,
        cwd: cwd.as_deref(),
        git: git_info.as_ref(),
        report: &report,
    };
    Ok(render_line(&config, &ctx))
}
