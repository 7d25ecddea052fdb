/// Get environment variable with TASKBOARD_ prefix, falling back to unprefixed version
///
/// Checks `TASKBOARD_{key}` first, then `{key}`.
///
/// # Examples
///
/// ```rust
/// use taskboard::utils::get_env_with_prefix;
///
/// // Checks TASKBOARD_LOG_LEVEL first, then LOG_LEVEL
/// let level = get_env_with_prefix("LOG_LEVEL");
/// ```
pub fn get_env_with_prefix(key: &str) -> Option<String> {
    std::env::var(format!("TASKBOARD_{}", key))
        .or_else(|_| std::env::var(key))
        .ok()
}
