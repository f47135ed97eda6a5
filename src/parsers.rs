use std::path::PathBuf;

/// Upper bound accepted for `--jobs`.
pub const MAX_JOBS: usize = 512;

/// Worker count for `--jobs`, between 1 and [`MAX_JOBS`].
///
/// # Errors
/// Returns a message naming the flag when the value is not a number or out of range.
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    let jobs = parse_count("--jobs", s)?;
    if jobs > MAX_JOBS {
        return Err(format!("--jobs must be at most {MAX_JOBS}, got {jobs}"));
    }
    Ok(jobs)
}

/// Channel capacity for `--queue-capacity`; any count of at least 1.
///
/// # Errors
/// Returns a message naming the flag when the value is not a positive number.
pub fn parse_queue_capacity(s: &str) -> Result<usize, String> {
    parse_count("--queue-capacity", s)
}

fn parse_count(flag: &str, s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err(format!("{flag} must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("{flag} expects a whole number, got '{s}'")),
    }
}

/// Scan root as typed by the user, minus any trailing `/`.
///
/// A root of only slashes stays `/`.
///
/// # Errors
/// Returns an error for an empty argument.
pub fn parse_root(s: &str) -> Result<PathBuf, String> {
    if s.is_empty() {
        return Err("path must not be empty".to_string());
    }
    let trimmed = s.trim_end_matches('/');
    Ok(PathBuf::from(if trimmed.is_empty() { "/" } else { trimmed }))
}
