use std::io::Write;

// Console only. A run that fails before any image work must not leave files
// behind, so there is no log file.

pub fn log_line(line: &str) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{}", line);
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    let mut err = std::io::stderr().lock();
    let _ = writeln!(err, "{}: {}", prefix, e);
}
