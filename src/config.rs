//! Runtime configuration and command-line parsing.

use std::io;
use std::path::PathBuf;

use crate::core::constants::{DATA_DIR_NAME, LOG_FILE_NAME, SAVES_DIR_NAME};

pub const USAGE: &str = "\
RL Arena - turn-based terminal combat

Usage: rl-arena [options]

Options:
  --fast              Skip pauses between turns and stages
  --seed <n>          Use a fixed random seed
  --save-dir <path>   Store and read replays in <path>
  --version, -v       Show version information
  --help, -h          Show this help message";

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Where finished sessions are saved and replays are listed from.
    pub save_dir: PathBuf,

    /// Log file location.
    pub log_file: PathBuf,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Whether pauses actually wait
    pub pacing: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(GameConfig),
    Help,
    Version,
}

/// `~/.rl-arena`, which holds the saves directory and the log file.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

impl GameConfig {
    /// Defaults rooted at `data_dir`.
    pub fn in_dir(data_dir: PathBuf) -> Self {
        Self {
            save_dir: data_dir.join(SAVES_DIR_NAME),
            log_file: data_dir.join(LOG_FILE_NAME),
            seed: None,
            pacing: true,
        }
    }

    /// Parses the arguments after the program name against `home`, the
    /// result of [`data_dir`].
    ///
    /// The home directory is only needed when no `--save-dir` is given.
    /// Without one, an explicit save directory also holds the log file.
    pub fn resolve(args: &[String], home: io::Result<PathBuf>) -> io::Result<Command> {
        match home {
            Ok(dir) => Self::from_args(args, Self::in_dir(dir)),
            Err(e) => match Self::parse(args, Self::in_dir(PathBuf::from(".")))? {
                (Command::Play(mut config), true) => {
                    config.log_file = config.save_dir.join(LOG_FILE_NAME);
                    Ok(Command::Play(config))
                }
                (Command::Play(_), false) => Err(e),
                (command, _) => Ok(command),
            },
        }
    }

    /// Parses the arguments after the program name.
    pub fn from_args(args: &[String], defaults: GameConfig) -> io::Result<Command> {
        Self::parse(args, defaults).map(|(command, _)| command)
    }

    /// Also reports whether `--save-dir` was given.
    fn parse(args: &[String], defaults: GameConfig) -> io::Result<(Command, bool)> {
        let mut config = defaults;
        let mut save_dir_given = false;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok((Command::Help, save_dir_given)),
                "--version" | "-v" => return Ok((Command::Version, save_dir_given)),
                "--fast" => config.pacing = false,
                "--seed" => {
                    let value = iter.next().ok_or_else(|| invalid("--seed needs a value"))?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| invalid(&format!("invalid seed: {}", value)))?;
                    config.seed = Some(seed);
                }
                "--save-dir" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| invalid("--save-dir needs a path"))?;
                    config.save_dir = PathBuf::from(value);
                    save_dir_given = true;
                }
                other => return Err(invalid(&format!("Unknown argument: {}", other))),
            }
        }

        Ok((Command::Play(config), save_dir_given))
    }
}

fn invalid(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message.to_string())
}
