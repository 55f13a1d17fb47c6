//! Output formatting for the CLI.

use console::{measure_text_width, style};
use indicatif::{ProgressBar, ProgressStyle};
use inventory_console::Table;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a rendered resource table. The actions column becomes the row
    /// id, or a dash when the row has no actions.
    pub fn table(&self, table: &Table) {
        if self.json {
            return;
        }

        let mut headers: Vec<String> = table.headers.iter().map(|h| h.to_string()).collect();
        if let Some(last) = headers.last_mut() {
            *last = "Ref".to_string();
        }

        if let Some(ref message) = table.error {
            println!("  {}", style(message).red());
            return;
        }
        if table.rows.is_empty() {
            println!("  {}", style("(no records)").dim());
            return;
        }

        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| {
                let mut cells = row.cells.clone();
                cells.push(
                    row.id
                        .as_ref()
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                );
                cells
            })
            .collect();

        let widths: Vec<usize> = (0..headers.len())
            .map(|col| {
                rows.iter()
                    .filter_map(|r| r.get(col))
                    .chain(std::iter::once(&headers[col]))
                    .map(|c| measure_text_width(c))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        self.table_row(&headers, &widths, true);
        for row in &rows {
            self.table_row(row, &widths, false);
        }
    }

    fn table_row(&self, cols: &[String], widths: &[usize], header: bool) {
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| {
                let pad = width.saturating_sub(measure_text_width(col));
                format!("{}{}", col, " ".repeat(pad))
            })
            .collect();
        let line = formatted.join("  ");
        if header {
            println!("  {}", style(line).bold());
        } else {
            println!("  {}", line);
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored order status.
pub fn status_badge(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "delivered" | "shipped" | "completed" => style(status).green().to_string(),
        "pending" | "processing" => style(status).yellow().to_string(),
        "cancelled" | "canceled" | "failed" => style(status).red().to_string(),
        _ => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_keeps_text() {
        console::set_colors_enabled(false);
        assert_eq!(status_badge("pending"), "pending");
        assert_eq!(status_badge("on hold"), "on hold");
    }
}
