use std::sync::Once;

/// Filter applied when neither `LoggingConfig::env_filter` nor `RUST_LOG` is set.
///
/// wgpu logs adapter probing and shader compilation at `info`; those crates
/// are capped at `warn` so the clock's own lifecycle messages stay readable.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "mondaine_ui=trace,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter that takes precedence over `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

/// Picks the filter: explicit config, then `RUST_LOG`, then [`DEFAULT_FILTER`].
///
/// Blank values at either level count as unset.
fn resolve_filter(config: Option<String>, env: Option<String>) -> String {
    let non_blank = |f: &String| !f.trim().is_empty();
    config
        .filter(non_blank)
        .or_else(|| env.filter(non_blank))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        builder.format_timestamp_millis();

        if let Err(e) = builder.try_init() {
            // Another logger was installed by the host; keep it.
            eprintln!("mondaine logging not installed: {e}");
            return;
        }

        log::debug!("logging initialized with filter `{filter}`");
    });
}
