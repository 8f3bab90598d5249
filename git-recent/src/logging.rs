use std::path::PathBuf;

const APP_NAME: &str = "git-recent";
const LOG_FILE_NAME: &str = "git-recent.log";

/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV: &str = "GIT_RECENT_LOG";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

pub fn cache_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        if let Ok(xdg_cache_home) = std::env::var("XDG_CACHE_HOME")
            && !xdg_cache_home.is_empty()
        {
            return Some(PathBuf::from(xdg_cache_home).join(APP_NAME));
        }
        dirs::home_dir().map(|home| home.join(".cache").join(APP_NAME))
    }
    #[cfg(windows)]
    {
        Some(
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_NAME),
        )
    }
}

pub fn default_log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Parse a level name such as `debug`, falling back to the default for anything unknown
pub fn parse_level(value: &str) -> log::LevelFilter {
    value.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn level_from_env() -> log::LevelFilter {
    std::env::var(LOG_LEVEL_ENV).map_or(DEFAULT_LOG_LEVEL, |value| parse_level(&value))
}

pub fn setup_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    let log_file =
        default_log_file().ok_or_else(|| anyhow::anyhow!("unable to find home directory"))?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    simple_log::file(log_file.to_string_lossy().into_owned(), level, 10, 10)
        .map_err(|e| anyhow::anyhow!(e))?;
    log::info!("git-recent logging initialised (level={level})");
    Ok(())
}
