//! # Git Module
//!
//! Branch name and dirty-file count from the `git` binary.
//!
//! Every command runs under a short deadline. A missing binary, a directory outside any
//! repository, or a slow filesystem all come back as `None`; the statusline then drops the
//! git field instead of waiting.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use crate::models::GitInfo;

pub const GIT_TIMEOUT: Duration = Duration::from_secs(2);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub fn read_git_info(dir: &Path) -> Option<GitInfo> {
    match query(dir, GIT_TIMEOUT) {
        Ok(info) => Some(info),
        Err(e) => {
            tracing::debug!(dir = %dir.display(), "no git info: {e:#}");
            None
        }
    }
}

fn query(dir: &Path, timeout: Duration) -> Result<GitInfo> {
    // One deadline covers the whole lookup.
    let deadline = Instant::now() + timeout;
    // symbolic-ref also names an unborn branch, where `rev-parse HEAD` fails.
    let branch = match run_git(dir, &["symbolic-ref", "--quiet", "--short", "HEAD"], deadline) {
        Ok(name) => name.trim().to_string(),
        // Detached HEAD: show the short commit instead.
        Err(_) => run_git(dir, &["rev-parse", "--short", "HEAD"], deadline)?
            .trim()
            .to_string(),
    };
    if branch.is_empty() {
        bail!("git reported an empty branch name");
    }
    let status = run_git(dir, &["status", "--porcelain"], deadline)?;
    Ok(GitInfo {
        branch,
        dirty_files: count_porcelain_entries(&status),
    })
}

/// One entry per non-empty line of `git status --porcelain`, covering modified, staged and
/// untracked paths alike.
pub fn count_porcelain_entries(porcelain: &str) -> usize {
    porcelain.lines().filter(|l| !l.trim().is_empty()).count()
}

/// Runs `git -C <dir> <args>` and returns stdout, killing the child once `deadline` passes.
fn run_git(dir: &Path, args: &[&str], deadline: Instant) -> Result<String> {
    let mut child = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn git")?;

    // Drain stdout on a helper thread so a large status listing cannot fill the pipe and
    // stall the child past its deadline.
    let mut stdout = child.stdout.take().context("git stdout not captured")?;
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let res = stdout.read_to_end(&mut buf).map(|_| buf);
        let _ = tx.send(res);
    });

    let status = loop {
        if let Some(status) = child.try_wait().context("wait for git")? {
            break status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            bail!("git {} timed out", args.join(" "));
        }
        thread::sleep(POLL_INTERVAL);
    };
    if !status.success() {
        bail!("git {} exited with {}", args.join(" "), status);
    }
    let remaining = deadline.saturating_duration_since(Instant::now());
    let bytes = rx
        .recv_timeout(remaining.max(POLL_INTERVAL))
        .context("git output not received")?
        .context("read git output")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
