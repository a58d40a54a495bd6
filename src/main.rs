// rcls - Rust Technicolor ls
// A fast, colorized directory listing tool for Unix

use std::process;

use rcls::ehm::AppError;

fn main() {
    if let Err(e) = rcls::run() {
        eprintln!("rcls: {}", e);
        if matches!(e, AppError::InvalidArg(_)) {
            rcls::usage::print_usage();
        }
        process::exit(1);
    }
}
