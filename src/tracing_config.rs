//! Log setup for `gls-server`.
//!
//! stdout carries protocol responses, so every subscriber here writes to
//! stderr. Nothing is installed unless `GLS_LOG` or `RUST_LOG` is set; an
//! editor spawning the server without either gets a silent process.
//!
//! What the server emits, by level:
//!
//! | level | target | event |
//! |---|---|---|
//! | `warn` | `gls` | rejected snapshot on `open` |
//! | `warn` | `gls_lsp`, `gls_ast` | scope walk or inheritance chain cut off (cycle or depth cap) |
//! | `debug` | `gls_ast` | document opened / closed |
//! | `debug` | `gls_lsp` | `get_completions` span (line, character) and the resolved item count |
//! | `trace` | `gls_ast` | expressions whose static type could not be named |
//!
//! `GLS_LOG_FORMAT` picks the rendering: `text` (default), `tree` to see each
//! completion span nested with its events, or `json` for collecting logs from
//! an editor session.
//!
//! ```bash
//! GLS_LOG=gls_lsp=debug GLS_LOG_FORMAT=tree gls-server < session.jsonl
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging choices taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directives; `None` disables logging.
    pub directives: Option<String>,
    pub format: LogFormat,
}

impl LogSettings {
    /// `GLS_LOG` wins over `RUST_LOG`.
    pub fn from_vars(gls_log: Option<String>, rust_log: Option<String>, format: Option<&str>) -> Self {
        Self {
            directives: gls_log.or(rust_log),
            format: format.map(LogFormat::parse).unwrap_or_default(),
        }
    }

    pub fn from_env() -> Self {
        let format = std::env::var("GLS_LOG_FORMAT").ok();
        Self::from_vars(
            std::env::var("GLS_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            format.as_deref(),
        )
    }
}

/// Install the global subscriber described by the environment.
pub fn init_tracing() {
    let settings = LogSettings::from_env();
    let Some(directives) = settings.directives else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(directives);

    match settings.format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }

    #[test]
    fn test_no_filter_means_no_logging() {
        let settings = LogSettings::from_vars(None, None, Some("tree"));
        assert_eq!(settings.directives, None);
        assert_eq!(settings.format, LogFormat::Tree);
    }

    #[test]
    fn test_gls_log_overrides_rust_log() {
        let settings =
            LogSettings::from_vars(Some("gls_lsp=trace".into()), Some("warn".into()), None);
        assert_eq!(settings.directives.as_deref(), Some("gls_lsp=trace"));
        assert_eq!(settings.format, LogFormat::Text);

        let fallback = LogSettings::from_vars(None, Some("warn".into()), None);
        assert_eq!(fallback.directives.as_deref(), Some("warn"));
    }
}
