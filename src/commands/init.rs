use std::io::{self, Write};

use crate::config::Config;
use crate::error::{MediaError, Result};
use crate::output::OutputFormat;

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn render_config(format: Option<OutputFormat>, max_width: Option<usize>) -> String {
    let mut config_content = String::new();
    match format {
        Some(OutputFormat::Table) => config_content.push_str("format = \"table\"\n"),
        Some(OutputFormat::Json) => config_content.push_str("format = \"json\"\n"),
        None => {}
    }
    if let Some(max_width) = max_width {
        config_content.push_str(&format!("max_width = {max_width}\n"));
    }
    config_content
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("twmedia Configuration");
    println!("=====================\n");

    let format = prompt("Default output format (table or json) [optional]: ")?;
    let format = if format.is_empty() {
        None
    } else {
        Some(format.parse::<OutputFormat>()?)
    };

    let max_width = prompt("Maximum column width for tables [optional]: ")?;
    let max_width = if max_width.is_empty() {
        None
    } else {
        Some(
            max_width
                .parse::<usize>()
                .map_err(|_| MediaError::InvalidWidth(max_width.clone()))?,
        )
    };

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MediaError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, render_config(format, max_width)).map_err(|e| {
        MediaError::ConfigRead {
            path: config_path.clone(),
            source: e,
        }
    })?;

    println!("\nConfig saved to {}", config_path.display());

    Ok(())
}
