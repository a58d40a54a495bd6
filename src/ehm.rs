// ehm.rs — Error handling module
//
// Unified Result<T, AppError> + ? operator + From trait conversions.
// Fatal errors (a directory that cannot be opened, a bad switch) surface
// here; per-entry failures stay diagnostics and never become AppError.

use std::fmt;
use std::path::PathBuf;





/// Unified error type for rcls.
#[derive(Debug)]
pub enum AppError {
    /// Standard I/O error
    Io(std::io::Error),

    /// Invalid command-line argument (triggers usage display + exit 1)
    InvalidArg(String),

    /// Target directory cannot be opened for enumeration
    DirectoryOpen { path: PathBuf, source: std::io::Error },
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl fmt::Display for AppError
//
//  Formats AppError variants for display output.
//
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "{}", e),
            AppError::InvalidArg(msg) => write!(f, "{}", msg),
            AppError::DirectoryOpen { path, source } => {
                write!(f, "cannot open directory '{}': {}", path.display(), source)
            }
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl std::error::Error for AppError
//
//  Returns the underlying error source, if any.
//
////////////////////////////////////////////////////////////////////////////////

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::DirectoryOpen { source, .. } => Some(source),
            _ => None,
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl From<std::io::Error> for AppError
//
//  Converts a standard I/O error into AppError::Io.
//
////////////////////////////////////////////////////////////////////////////////

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
