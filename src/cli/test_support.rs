//! Shared fixtures for shell unit tests.

use std::sync::Mutex;

use lease_config::ConfigManager;
use lease_core::{parse_timestamp, FixedClock};
use tempfile::TempDir;

use super::core::{CliMode, ShellContext};

/// Keeps temporary config directories alive for the whole test run.
static TEST_DIRS: Mutex<Vec<TempDir>> = Mutex::new(Vec::new());

/// Script-mode context with an isolated config dir and a clock pinned to `now`.
pub(crate) fn script_context(now: &str) -> ShellContext {
    let temp = TempDir::new().expect("create temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("config manager");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let clock = FixedClock(parse_timestamp(now).expect("valid test timestamp"));
    ShellContext::with_parts(CliMode::Script, manager, Box::new(clock)).expect("shell context")
}
