//! Logger setup. The game owns the terminal, so log lines go to a file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Env, Target};

const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger`, honouring `RUST_LOG` (default `warn`).
///
/// Lines are appended to `log_file`; if it cannot be opened they go to stderr.
pub fn init_logging(log_file: &Path) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(buf, "{} [{}] {}", ts, record.level(), record.args())
    });

    if let Some(parent) = log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.target(Target::Stderr);
        }
    }

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
