use std::io::{IsTerminal, Read};
use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::NumberFormat;
use crate::error::{Result, StatuslineError};

/// Logs go to stderr so they never mix with the rendered line. `RUST_LOG` wins over `debug`.
pub fn setup_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

pub fn read_stdin() -> Result<Vec<u8>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(StatuslineError::StdinIsTerminal);
    }
    read_input(stdin.lock())
}

/// Reads the whole session descriptor, rejecting whitespace-only input.
pub fn read_input<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(StatuslineError::ReadStdin)?;
    if buf.iter().all(u8::is_ascii_whitespace) {
        return Err(StatuslineError::EmptyInput);
    }
    Ok(buf)
}

/// Last path component of the working directory, e.g. `proj` for `/home/u/proj/`.
pub fn folder_name(dir: &str) -> Option<String> {
    Path::new(dir)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
}

pub fn format_number(n: u64, mode: NumberFormat) -> String {
    match mode {
        NumberFormat::Compact => {
            // 999_950 would print as 1000.0K, so the unit is picked after rounding.
            if n >= 1_000_000 || (n as f64 / 100.0).round() >= 10_000.0 {
                format!("{:.1}M", n as f64 / 1e6)
            } else if n >= 1_000 {
                format!("{:.1}K", n as f64 / 1e3)
            } else {
                n.to_string()
            }
        }
        NumberFormat::Full => group_thousands(n),
        NumberFormat::Raw => n.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `4.0s` under a minute, `12m` under an hour, `1.5h` under a day, then whole days. The unit
/// is chosen after rounding, so `59.96` reads `1m` rather than `60.0s`.
pub fn format_duration(secs: f64) -> String {
    let secs = secs.max(0.0);
    let tenths = (secs * 10.0).round();
    if tenths < 600.0 {
        return format!("{:.1}s", tenths / 10.0);
    }
    if secs < 3600.0 {
        return format!("{}m", ((secs / 60.0) as u64).max(1));
    }
    let hour_tenths = (secs / 360.0).round();
    if hour_tenths < 240.0 {
        format!("{:.1}h", hour_tenths / 10.0)
    } else {
        format!("{}d", ((secs / 86_400.0) as u64).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_numbers() {
        assert_eq!(format_number(0, NumberFormat::Compact), "0");
        assert_eq!(format_number(999, NumberFormat::Compact), "999");
        assert_eq!(format_number(1_000, NumberFormat::Compact), "1.0K");
        assert_eq!(format_number(12_345, NumberFormat::Compact), "12.3K");
        assert_eq!(format_number(1_500_000, NumberFormat::Compact), "1.5M");
    }

    #[test]
    fn compact_unit_follows_rounding() {
        assert_eq!(format_number(999_949, NumberFormat::Compact), "999.9K");
        assert_eq!(format_number(999_950, NumberFormat::Compact), "1.0M");
        assert_eq!(format_number(999_999, NumberFormat::Compact), "1.0M");
    }

    #[test]
    fn full_and_raw_numbers() {
        assert_eq!(format_number(0, NumberFormat::Full), "0");
        assert_eq!(format_number(999, NumberFormat::Full), "999");
        assert_eq!(format_number(1_000, NumberFormat::Full), "1,000");
        assert_eq!(format_number(1_234_567, NumberFormat::Full), "1,234,567");
        assert_eq!(format_number(123_456, NumberFormat::Full), "123,456");
        assert_eq!(format_number(1_234_567, NumberFormat::Raw), "1234567");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(0.0), "0.0s");
        assert_eq!(format_duration(4.0), "4.0s");
        assert_eq!(format_duration(59.94), "59.9s");
        assert_eq!(format_duration(60.0), "1m");
        assert_eq!(format_duration(754.0), "12m");
        assert_eq!(format_duration(3_600.0), "1.0h");
        assert_eq!(format_duration(5_400.0), "1.5h");
        assert_eq!(format_duration(86_400.0), "1d");
        assert_eq!(format_duration(3.0 * 86_400.0 + 5.0), "3d");
    }

    #[test]
    fn duration_unit_follows_rounding() {
        assert_eq!(format_duration(59.96), "1m");
        assert_eq!(format_duration(3_599.9), "59m");
        assert_eq!(format_duration(86_000.0), "23.9h");
        assert_eq!(format_duration(86_399.0), "1d");
    }

    #[test]
    fn folder_is_last_component() {
        assert_eq!(folder_name("/home/u/proj").as_deref(), Some("proj"));
        assert_eq!(folder_name("/home/u/proj/").as_deref(), Some("proj"));
        assert_eq!(folder_name("/"), None);
        assert_eq!(folder_name(""), None);
    }

    #[test]
    fn whitespace_input_is_empty() {
        assert!(matches!(
            read_input("  \n".as_bytes()),
            Err(StatuslineError::EmptyInput)
        ));
        assert!(matches!(read_input(&b""[..]), Err(StatuslineError::EmptyInput)));
        assert_eq!(read_input(&b"{}"[..]).unwrap(), b"{}");
    }
}
