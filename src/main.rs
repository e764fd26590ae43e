use std::io;

use rl_arena::build_info;
use rl_arena::config::{data_dir, Command, GameConfig, USAGE};
use rl_arena::core::rng::game_rng;
use rl_arena::lobby::run_lobby;
use rl_arena::logging::init_logging;
use rl_arena::save_manager::SaveManager;
use rl_arena::ui::TerminalConsole;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match GameConfig::resolve(&args, data_dir()) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidInput => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}. Pass --save-dir to choose where replays go.", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_file);
    log::info!("starting {}", build_info::version_line());

    let mut console = TerminalConsole::new(config.pacing);
    if let Err(e) = run(&config, &mut console) {
        log::error!("fatal: {}", e);
        let _ = console.reset();
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &GameConfig, console: &mut TerminalConsole) -> io::Result<()> {
    let mut rng = game_rng(config.seed);
    let saves = SaveManager::new(config.save_dir.clone());
    run_lobby(console, &mut rng, &saves)
}
