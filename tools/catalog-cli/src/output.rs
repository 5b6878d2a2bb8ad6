//! Output formatting for the CLI.

use chrono::{DateTime, Utc};
use console::{style, Term};
use storefront_catalog::catalog::{Category, Locale};
use storefront_catalog::{CatalogError, ErrorBody};

/// Output handler for CLI messages.
///
/// In JSON mode only `json` and errors print; everything else is suppressed
/// so stdout stays machine-readable.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
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

    /// Print an error. In JSON mode this is an `{"message": ...}` body.
    pub fn error(&self, msg: &str) {
        if self.json {
            self.json_err(&ErrorBody {
                message: msg.to_string(),
                field: None,
            });
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a domain error with the field it names.
    pub fn catalog_error(&self, err: &CatalogError, context: &str) {
        if self.json {
            self.json_err(&ErrorBody::from(err));
            return;
        }
        let mut msg = format!("{}: {}", context, err);
        if let Some(field) = err.field() {
            msg.push_str(&format!(" [field: {}]", field));
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print an error body to stderr.
    fn json_err(&self, body: &ErrorBody) {
        if let Ok(json) = serde_json::to_string(body) {
            eprintln!("{}", json);
        }
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

    /// Print a table row, truncating columns to the terminal width.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad(col, *width))
            .collect();
        let line = format!("  {}", formatted.join("  "));
        println!("{}", console::truncate_str(&line, self.term_width(), "…"));
    }

    /// Print every field of a category.
    pub fn category(&self, cat: &Category, locale: Locale) {
        if self.json {
            self.json(cat);
            return;
        }
        self.header(cat.localized_name(locale));
        self.kv("id", cat.id.as_str());
        self.kv("slug", &cat.slug);
        self.kv("status", &status_badge(cat.is_active));
        self.kv("name", &cat.name);
        if let Some(en) = &cat.name_en {
            self.kv("name (en)", en);
        }
        if let Some(ja) = &cat.name_ja {
            self.kv("name (ja)", ja);
        }
        if let Some(desc) = cat.localized_description(locale) {
            self.kv("description", desc);
        }
        self.kv("image", cat.image_or_placeholder());
        self.kv(
            "products",
            &cat.product_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
        self.kv("created", &format_timestamp(&cat.created_at));
        self.kv("updated", &format_timestamp(&cat.updated_at));
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Terminal width, or 120 when not attached to a terminal.
    pub fn term_width(&self) -> usize {
        if self.term.is_term() {
            self.term.size().1 as usize
        } else {
            120
        }
    }
}

/// Left-align `s` in `width` display columns.
fn pad(s: &str, width: usize) -> String {
    console::pad_str(s, width, console::Alignment::Left, Some("…")).into_owned()
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Colored visibility badge.
pub fn status_badge(active: bool) -> String {
    if active {
        style("active").green().to_string()
    } else {
        style("inactive").dim().to_string()
    }
}
