// Logging - powered by tracing-subscriber
//
// Library crates only emit `tracing` events; the CLI installs the single
// subscriber. Output goes to stderr so `--format json` stays parseable.

use tracing_subscriber::EnvFilter;

use crate::LogLevel;

/// Third-party crates that are chatty at debug level
const NOISY_CRATES: &[(&str, &str)] = &[
    ("hyper", "warn"),
    ("hyper_util", "warn"),
    ("reqwest", "warn"),
    ("rustls", "warn"),
    ("h2", "warn"),
];

/// Build the filter: `RUST_LOG` when set, otherwise `level` plus quiet
/// overrides for noisy dependencies.
pub fn build_env_filter(level: LogLevel) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut directives = vec![level.as_str().to_string()];
    for (target, lvl) in NOISY_CRATES {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(level: LogLevel) -> anyhow::Result<()> {
    let filter = build_env_filter(level)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}
