// SPDX-License-Identifier: MPL-2.0
//! Resolution of the on-disk directories the application writes to.
//!
//! Two directories exist: the data directory (persisted session state,
//! `state.cbor`) and the config directory (`settings.toml`). Every
//! component obtains them through this module so overrides behave the
//! same everywhere.
//!
//! A directory is resolved by taking the first of:
//!
//! 1. an explicit override passed by the caller (tests use this),
//! 2. the `--data-dir` / `--config-dir` CLI flags, recorded once at
//!    startup through [`init_cli_overrides`],
//! 3. the `REELCUT_DATA_DIR` / `REELCUT_CONFIG_DIR` environment
//!    variables, when set to a non-empty value,
//! 4. the platform directory reported by the `dirs` crate, with
//!    `Reelcut` appended.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to the platform defaults.
const APP_NAME: &str = "Reelcut";

/// Environment variable redirecting the data directory.
pub const ENV_DATA_DIR: &str = "REELCUT_DATA_DIR";

/// Environment variable redirecting the config directory.
pub const ENV_CONFIG_DIR: &str = "REELCUT_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI flags.
///
/// Must run before any resolution function, and only once per process;
/// a second call panics because the backing cells are write-once.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Serializes tests that set the path environment variables. Shared with the
/// app-level tests so they cannot race each other across modules.
#[cfg(test)]
pub(crate) fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_MUTEX
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Walks the override chain for one directory kind.
///
/// `platform` is the `dirs` accessor for the fallback location; its result
/// gets [`APP_NAME`] appended, while every override is used verbatim.
fn resolve(
    explicit: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_name: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }
    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }
    match std::env::var(env_name) {
        Ok(value) if !value.is_empty() => return Some(PathBuf::from(value)),
        _ => {}
    }
    platform().map(|mut dir| {
        dir.push(APP_NAME);
        dir
    })
}

/// Directory for application state (not user preferences).
///
/// Without overrides this lands in the platform data directory, e.g.
/// `~/.local/share/Reelcut/` on Linux or `~/Library/Application
/// Support/Reelcut/` on macOS. `None` means the platform reported no
/// home directory at all.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Same as [`get_app_data_dir`] but lets the caller pin the directory,
/// bypassing CLI, environment and platform resolution entirely.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Directory for user preferences (`settings.toml`).
///
/// Without overrides this lands in the platform config directory, e.g.
/// `~/.config/Reelcut/` on Linux. `None` means the platform reported no
/// home directory at all.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Same as [`get_app_config_dir`] but lets the caller pin the directory,
/// bypassing CLI, environment and platform resolution entirely.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}
