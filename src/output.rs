use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::error::MediaError;

/// Global output settings
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(MediaError::InvalidFormat(s.to_string())),
        }
    }
}

pub fn set_format(format: OutputFormat) {
    OUTPUT_JSON.store(format == OutputFormat::Json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a table or JSON depending on output mode
pub fn print_table<T, R, F>(items: &[T], to_row: F)
where
    T: Serialize,
    R: Tabled,
    F: Fn(usize, &T) -> R,
{
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
    } else {
        let rows: Vec<R> = items
            .iter()
            .enumerate()
            .map(|(i, item)| to_row(i + 1, item))
            .collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }
}

/// Print an informational message (skipped in quiet mode, simple object in JSON mode)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }

    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

/// Format a success summary, uncolored in JSON mode
pub fn success(message: &str) -> String {
    if is_json_output() {
        message.to_string()
    } else {
        message.green().to_string()
    }
}

/// Show an optional value, or `-` when it is absent
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("https://t.co/a", 20), "https://t.co/a");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(
            truncate("https://pbs.twimg.com/media/x.jpg", 16),
            "https://pbs.t..."
        );
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééééééé", 5), "éé...");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("http://a")), "http://a");
    }
}
