use std::path::{Path, PathBuf};
use times_core::config::{Config, CONFIG_FILE};

/// Resolve the config file to load.
///
/// Priority:
/// 1. `--config` flag / `TIMES_CONFIG` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `times.yaml`
/// 3. None: built-in defaults apply
pub fn resolve_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    Config::discover(&cwd)
}

/// Where `config init` writes: the explicit path, else `./times.yaml`.
pub fn init_target(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(CONFIG_FILE),
    }
}
