/// Directory appended to `PATH` for the launched application.
pub const EXTRA_PATH: &str = "/usr/local/bin";

/// `current` with `extra` appended unless it is already the last entry.
/// Leading and trailing `:` are trimmed from both; earlier entries keep
/// their order, including empty ones.
#[must_use]
pub fn augmented_path(current: Option<&str>, extra: &str) -> String {
    let current = current.unwrap_or_default().trim_matches(':');
    let extra = extra.trim_matches(':');

    if extra.is_empty() {
        return current.to_string();
    }
    if current.is_empty() {
        return extra.to_string();
    }
    if current.rsplit(':').next() == Some(extra) {
        return current.to_string();
    }
    format!("{current}:{extra}")
}
