//! # Claude Perfline
//!
//! A single-line performance statusline for Claude Code sessions.
//!
//! ## Overview
//!
//! The binary reads the session JSON Claude Code pipes to statusline commands, streams the
//! session transcript it names, and prints one line built from:
//! - Token usage and session cost from a static pricing table
//! - Cache-hit rate, response latency, generation rate, message count and session length
//! - A four-level health badge driven by configurable thresholds
//! - Folder, git branch and dirty-file count, and the model name
//!
//! ## Features
//!
//! - `git` (default): Enables the git branch/status field via the `git` binary
//! - `colors` (default): Enables themed truecolor output via owo-colors

/// Health badge classification and threshold parsing
pub mod badge;

/// Command-line argument parsing
pub mod cli;

/// Resolved rendering options and the field catalogue
pub mod config;

/// Session cost calculation and formatting
pub mod cost;

/// Statusline assembly
pub mod display;

/// Fatal error types and exit statuses
pub mod error;

/// Git branch and status lookup (feature-gated)
#[cfg(feature = "git")]
pub mod git;

/// Data models for the hook input, transcript records and git state
pub mod models;

/// Latency, throughput and cache metrics
pub mod perf;

/// Static model pricing table
pub mod pricing;

/// Metrics pipeline wiring
pub mod report;

/// Transcript loading
pub mod transcript;

/// Token usage aggregation
pub mod usage;

/// Stdin, logging and formatting helpers
pub mod utils;
