use std::path::PathBuf;

use clap::ArgMatches;
use tracing::error;

use mkcache_config::MkcacheConfig;
use mkcache_core::errors::MkcacheError;
use mkcache_core::events;
use mkcache_paths::MkcachePaths;

/// Load configuration, honoring a global `--config` override.
///
/// Unlike advisory settings, the repository list comes from config, so load
/// failures are fatal: the error is printed and returned.
pub(crate) fn load_config(
    global_matches: &ArgMatches,
) -> Result<MkcacheConfig, Box<dyn std::error::Error>> {
    let explicit = global_matches.get_one::<PathBuf>("config");

    match MkcacheConfig::load_hierarchy(explicit.map(|p| p.as_path())) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "❌ Could not load config: {}\n\
                 Tip: Check ~/.mkcache/config.toml{} for errors.",
                e,
                explicit
                    .map(|p| format!(" and {}", p.display()))
                    .unwrap_or_default()
            );
            error!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

pub(crate) fn resolve_paths() -> Result<MkcachePaths, Box<dyn std::error::Error>> {
    MkcachePaths::resolve().map_err(|e| {
        eprintln!("❌ {}", e);
        error!(event = "cli.paths.resolve_failed", error = %e);
        e.into()
    })
}

/// Metadata cache root: `[main] cachedir` or `~/.mkcache/cache`.
pub(crate) fn cache_dir(config: &MkcacheConfig, paths: &MkcachePaths) -> PathBuf {
    config
        .main
        .cachedir
        .clone()
        .unwrap_or_else(|| paths.cache_dir())
}

/// Render a signed number of seconds as `1h 2m 3s`.
///
/// Negative values (a stale timer listing) are rendered as `overdue by ...`.
pub(crate) fn format_duration(total_secs: i64) -> String {
    let magnitude = total_secs.unsigned_abs();
    let (hours, minutes, seconds) = (magnitude / 3600, (magnitude % 3600) / 60, magnitude % 60);

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    let rendered = parts.join(" ");
    if total_secs < 0 {
        format!("overdue by {}", rendered)
    } else {
        rendered
    }
}
