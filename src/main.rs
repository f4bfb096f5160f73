use std::path::{Path, PathBuf};
use std::process::ExitCode;

use resize_icons::logger::log_error;
use resize_icons::{IconConfig, IconError, generate_icons};

/// Console prefix and exit status for a finished run.
fn outcome(result: &Result<Vec<PathBuf>, IconError>) -> (Option<&'static str>, u8) {
    match result {
        Ok(_) => (None, 0),
        Err(IconError::SourceNotFound) => (Some("Error"), 1),
        Err(_) => (Some("Error processing image"), 1),
    }
}

fn main() -> ExitCode {
    let cfg = IconConfig::default();
    let result = generate_icons(Path::new("."), &cfg);
    let (prefix, code) = outcome(&result);
    if let (Some(prefix), Err(e)) = (prefix, &result) {
        log_error(prefix, e);
    }
    ExitCode::from(code)
}
