//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// The line printed by `--version`.
pub fn version_line() -> String {
    format!("rl-arena {} ({})", BUILD_DATE, BUILD_COMMIT)
}
