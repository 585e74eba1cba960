//! Identifier validation for interactive input
//!
//! Each validator returns `Err(message)` with the text shown to the user
//! before the prompt is repeated.

/// Validator signature shared by the prompt layer
pub type Validator = fn(&str) -> Result<(), String>;

const PROJECT_ID_MIN: usize = 6;
const PROJECT_ID_MAX: usize = 30;
const PROJECT_NAME_MIN: usize = 4;
const PROJECT_NAME_MAX: usize = 30;

/// Project ID: lowercase letter first, 6-30 characters of lowercase
/// letters, digits and hyphens, no trailing hyphen
pub fn validate_project_id(input: &str) -> Result<(), String> {
    const MESSAGE: &str = "Project ID must be between 6 and 30 characters, start with a letter, and contain only lowercase letters, numbers, and hyphens";

    let chars: Vec<char> = input.chars().collect();
    if !(PROJECT_ID_MIN..=PROJECT_ID_MAX).contains(&chars.len()) {
        return Err(MESSAGE.to_string());
    }
    let first = chars[0];
    let last = chars[chars.len() - 1];
    let body_ok = chars
        .iter()
        .all(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if first.is_ascii_lowercase() && is_lower_alnum(last) && body_ok {
        Ok(())
    } else {
        Err(MESSAGE.to_string())
    }
}

/// Project display name: 4-30 characters
pub fn validate_project_name(input: &str) -> Result<(), String> {
    let len = input.chars().count();
    if (PROJECT_NAME_MIN..=PROJECT_NAME_MAX).contains(&len) {
        Ok(())
    } else {
        Err("Project name must be between 4 and 30 characters".to_string())
    }
}

/// Bucket name: lowercase letters, digits, dots and hyphens; must start and
/// end with a letter or digit
pub fn validate_bucket_name(input: &str) -> Result<(), String> {
    const MESSAGE: &str =
        "Bucket name must contain only lowercase letters, numbers, dots, and hyphens";

    let chars: Vec<char> = input.chars().collect();
    if chars.len() < 3 {
        return Err(MESSAGE.to_string());
    }
    let first = chars[0];
    let last = chars[chars.len() - 1];
    let body_ok = chars
        .iter()
        .all(|&c| is_lower_alnum(c) || c == '-' || c == '.');

    if is_lower_alnum(first) && is_lower_alnum(last) && body_ok {
        Ok(())
    } else {
        Err(MESSAGE.to_string())
    }
}

/// Email address in the `user@domain.tld` shape
pub fn validate_email(input: &str) -> Result<(), String> {
    const MESSAGE: &str = "Please enter a valid email address";

    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return Err(MESSAGE.to_string());
    }
    let Some((local, domain)) = input.split_once('@') else {
        return Err(MESSAGE.to_string());
    };
    if local.is_empty() || domain.contains('@') {
        return Err(MESSAGE.to_string());
    }

    // The domain needs a dot with at least one character on either side
    let domain: Vec<char> = domain.chars().collect();
    if domain.len() < 3 || !domain[1..domain.len() - 1].contains(&'.') {
        return Err(MESSAGE.to_string());
    }
    Ok(())
}

/// IAM role identifier, e.g. `roles/storage.admin`
pub fn validate_role(input: &str) -> Result<(), String> {
    match input.strip_prefix("roles/") {
        Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace) => Ok(()),
        _ => Err("Role must start with \"roles/\"".to_string()),
    }
}

/// Full resource path used for org policy exceptions, e.g.
/// `//storage.googleapis.com/projects/_/buckets/my-bucket`
pub fn validate_resource_path(input: &str) -> Result<(), String> {
    match input.strip_prefix("//") {
        Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace) => Ok(()),
        _ => Err("Resource path must start with \"//\"".to_string()),
    }
}

/// Split a comma-separated flag value into trimmed, non-empty entries
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn is_lower_alnum(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
