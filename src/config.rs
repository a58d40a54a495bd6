// config.rs — Color configuration and RCLS env var overrides
//
// Holds the category → SGR color table, the column padding, and the default
// terminal width. Defaults mirror the classic scheme; the RCLS environment
// variable overrides individual category colors:
//
//   RCLS=Directory=LightBlue;Archive=Red
//
// Malformed entries warn on stderr and are otherwise ignored — a bad
// override never aborts a listing.

use crate::ansi_codes;
use crate::color::{self, ColorCategory};

/// Environment variable name
pub const RCLS_ENV_VAR_NAME: &str = "RCLS";

/// Separator spaces between adjacent columns in the multi-column layouts.
pub const COL_PADDING: usize = 2;

/// Fallback width when the terminal width is unavailable or zero.
pub const DEFAULT_TERM_WIDTH: usize = 80;





////////////////////////////////////////////////////////////////////////////////

/// Runtime display configuration.
pub struct Config {
    /// Category colors as ready-to-emit SGR sequences, indexed by
    /// ColorCategory. An empty string means the category renders unwrapped.
    pub category_colors: [String; ColorCategory::COUNT],

    /// Separator spaces between adjacent columns.
    pub padding: usize,

    /// Width assumed when the terminal cannot report one.
    pub default_width: usize,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config
//
//  Construction, env var overrides, and category color lookup.
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create a Config with the classic default color scheme.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new() -> Config {
        Config {
            category_colors: [
                ansi_codes::sgr_foreground(ansi_codes::FG_BLUE),    // Directory
                ansi_codes::sgr_foreground(ansi_codes::FG_MAGENTA), // Symlink
                ansi_codes::REVERSE_VIDEO.to_string(),              // SpecialDevice
                ansi_codes::sgr_foreground(ansi_codes::FG_GREEN),   // Executable
                ansi_codes::sgr_foreground(ansi_codes::FG_RED),     // Archive
                String::new(),                                      // Default
            ],
            padding:       COL_PADDING,
            default_width: DEFAULT_TERM_WIDTH,
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_env
    //
    //  Create a Config and apply overrides from the RCLS env var value, if
    //  set. Entries are Key=ColorName pairs separated by ';'. Unknown keys
    //  or color names warn on stderr and are skipped.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_env(env_value: Option<String>) -> Config {
        let mut config = Config::new();

        if let Some(value) = env_value {
            config.apply_env_overrides(&value);
        }

        config
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_env_overrides
    //
    //  Parse a semicolon-separated list of Category=ColorName overrides.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn apply_env_overrides(&mut self, value: &str) {
        for entry in value.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let Some((key, color_name)) = entry.split_once('=') else {
                eprintln!("rcls: ignoring malformed {} entry '{}'", RCLS_ENV_VAR_NAME, entry);
                continue;
            };

            let Some(category) = ColorCategory::from_name(key.trim()) else {
                eprintln!("rcls: ignoring unknown {} category '{}'", RCLS_ENV_VAR_NAME, key.trim());
                continue;
            };

            match color::parse_color_name(color_name.trim()) {
                Ok(sgr) => self.category_colors[category as usize] = sgr,
                Err(e)  => eprintln!("rcls: ignoring {} entry '{}': {}", RCLS_ENV_VAR_NAME, entry, e),
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  color_for
    //
    //  SGR sequence for a category; None when the category renders unwrapped.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn color_for(&self, category: ColorCategory) -> Option<&str> {
        let sgr = &self.category_colors[category as usize];
        if sgr.is_empty() { None } else { Some(sgr) }
    }
}





impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
