// rcls - Rust Technicolor ls
// A fast, colorized directory listing tool for Unix

pub mod ehm;
pub mod ansi_codes;
pub mod color;
pub mod console;
pub mod command_line;
pub mod config;
pub mod file_info;
pub mod directory_lister;
pub mod file_comparator;
pub mod column_layout;
pub mod results_displayer;
pub mod owner;
pub mod usage;

use command_line::{CommandLine, DisplayMode, SortKey};
use config::Config;
use console::Console;
use ehm::AppError;
use results_displayer::{Displayer, ResultsDisplayer};

/// Main entry point for the library.
/// Called by main.rs; returns Result for clean error handling.
pub fn run() -> Result<(), AppError> {
    let cmd = CommandLine::parse_from(std::env::args().skip(1))?;
    let config = Config::from_env(std::env::var(config::RCLS_ENV_VAR_NAME).ok());
    let console = Console::initialize(&config);

    let mut entries = directory_lister::collect_entries(&cmd.dir_path)?;

    // Metadata feeds the long format, the time sort, and color
    // classification. Resolve it once, up front, and let every consumer
    // share the memoized result; name-only listings never stat at all.
    let needs_metadata = cmd.display_mode() == DisplayMode::Long
        || cmd.sort_key == SortKey::ModTime
        || console.color_active();

    if needs_metadata {
        directory_lister::resolve_all_metadata(&cmd.dir_path, &mut entries);
    }

    file_comparator::sort_entries(&mut entries, &cmd);

    let mut displayer = Displayer::new(console, config, &cmd);
    displayer.display_results(&entries);
    displayer.into_console().flush()?;

    Ok(())
}
