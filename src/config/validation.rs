use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref path) = config.default_csv {
        if path.trim().is_empty() {
            errors.push("default_csv: must not be blank".to_string());
        } else if path.contains('\n') {
            errors.push(format!("default_csv: invalid path '{}'", path.escape_debug()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
