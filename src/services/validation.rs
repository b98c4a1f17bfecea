//! Pure input validation rules. No I/O; every function either returns
//! the full list of violations or fails on the first violated rule.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ServiceError;

// Validation constants
const MIN_USERNAME_LENGTH: usize = 3;
const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_DESCRIPTION_LENGTH: usize = 255;
const MAX_PROGRAM_NAME_LENGTH: usize = 100;
const MIN_PROGRAM_SALARY: f64 = 1_200.0;
const MAX_PROGRAM_SALARY: f64 = 1_000_000.0;
const MIN_GPA: f64 = 0.0;
const MAX_GPA: f64 = 4.0;

// Regex patterns for validation
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._]{3,}$").unwrap());
static PASSWORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@#$%^&+=!]{6,}$").unwrap());
static CATEGORY_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,}$").unwrap());
static PROGRAM_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z](?:[A-Za-z\- ]*[A-Za-z])?$").unwrap());

/// Validate registration credentials, collecting every violation.
///
/// Returns an empty list when both fields pass. Empty input collapses
/// to a single unified message.
pub fn validate_credentials(username: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() || password.is_empty() {
        errors.push("All fields must be filled.".to_string());
        return errors;
    }

    if username.len() < MIN_USERNAME_LENGTH {
        errors.push("Username must be at least 3 characters long.".to_string());
    } else if !USERNAME_REGEX.is_match(username) {
        errors.push(
            "Username contains invalid characters. Allowed: letters, digits, underscore, dot."
                .to_string(),
        );
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        errors.push("Password must be at least 6 characters long.".to_string());
    } else if !PASSWORD_REGEX.is_match(password) {
        errors.push("Password contains invalid characters. Allowed: letters, digits, @#$%^&+=!".to_string());
    }

    errors
}

/// Validate a category name and description, failing on the first
/// violated rule.
pub fn validate_category(name: &str, description: &str) -> Result<(), ServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::validation("Category name cannot be empty."));
    }
    if !CATEGORY_NAME_REGEX.is_match(name) {
        return Err(ServiceError::validation(
            "Category name must contain only letters (A-Z or a-z).",
        ));
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(ServiceError::validation("Description too long (max 255 chars)."));
    }
    Ok(())
}

/// Validate program fields, failing on the first violated rule.
///
/// Salary bounds are the administrative ones: a catalog entry below the
/// 1,200 floor is considered a data-entry mistake.
pub fn validate_program(
    name: &str,
    min_salary: f64,
    min_previous_gpa: f64,
    post_degree_gpa: f64,
) -> Result<(), ServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::validation("Program name cannot be empty."));
    }
    if name.len() > MAX_PROGRAM_NAME_LENGTH {
        return Err(ServiceError::validation("Program name too long (max 100 chars)."));
    }
    if !PROGRAM_NAME_REGEX.is_match(name) {
        return Err(ServiceError::validation(
            "Program name may contain only letters, spaces, and hyphens.",
        ));
    }
    if !(MIN_PROGRAM_SALARY..=MAX_PROGRAM_SALARY).contains(&min_salary) {
        return Err(ServiceError::validation(
            "Minimum salary must be between 1,200 and 1,000,000.",
        ));
    }
    if !is_gpa_in_range(min_previous_gpa) {
        return Err(ServiceError::validation("Previous GPA must be between 0.0 and 4.0."));
    }
    if !is_gpa_in_range(post_degree_gpa) {
        return Err(ServiceError::validation("Post-degree GPA must be between 0.0 and 4.0."));
    }
    Ok(())
}

fn is_gpa_in_range(value: f64) -> bool {
    (MIN_GPA..=MAX_GPA).contains(&value)
}
