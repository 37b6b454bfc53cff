//! Field rules for skill frontmatter.

/// Check `name` against the naming rules and the directory it lives in.
///
/// The directory comparison only runs once the name itself is well formed, so
/// a malformed name is reported once rather than also as a mismatch.
pub fn validate_name(name: &str, directory_name: &str, max_len: usize) -> Vec<String> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push("Missing required field: 'name'".to_string());
        return errors;
    }

    let len = name.chars().count();
    if len > max_len {
        errors.push(format!("'name' exceeds {max_len} characters ({len} chars)"));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        errors.push("'name' must contain only lowercase letters, numbers, and hyphens".to_string());
    }

    if name.starts_with('-') || name.ends_with('-') {
        errors.push("'name' must not start or end with a hyphen".to_string());
    }

    if name.contains("--") {
        errors.push("'name' must not contain consecutive hyphens".to_string());
    }

    if errors.is_empty() && name != directory_name {
        errors.push(format!(
            "'name' ({name}) must match directory name ({directory_name})"
        ));
    }

    errors
}

/// Check `description` is present and within `max_len` characters.
pub fn validate_description(description: &str, max_len: usize) -> Vec<String> {
    if description.trim().is_empty() {
        return vec!["Missing required field: 'description'".to_string()];
    }

    let len = description.chars().count();
    if len > max_len {
        return vec![format!(
            "'description' exceeds {max_len} characters ({len} chars)"
        )];
    }

    Vec::new()
}
