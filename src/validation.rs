//! Field rules for the review editor. Each rule returns the message to show,
//! or `None` when the value is acceptable.
use regex::Regex;
use std::sync::LazyLock;

pub const CONTACT_METHODS: [&str; 4] = ["WhatsApp", "Email", "Phone", "SMS"];

// Leading 1-9, then 6 to 14 digits: 7 to 15 digits overall.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{6,14}$").expect("phone pattern compiles"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern compiles"));

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_length(label: &str, value: &str, min: usize, max: usize) -> Option<String> {
    let len = char_len(value);
    if len < min {
        Some(format!("{label} must be at least {min} characters"))
    } else if len > max {
        Some(format!("{label} must be less than {max} characters"))
    } else {
        None
    }
}

pub fn validate_contact_number(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Contact number is required".into());
    }
    if !PHONE_PATTERN.is_match(value) {
        return Some("Invalid phone number format. Use format: +1234567890".into());
    }
    None
}

pub fn validate_user_name(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("User name is required".into());
    }
    check_length("User name", value, 2, 128).or_else(|| {
        (!NAME_PATTERN.is_match(value)).then(|| {
            "User name can only contain letters, spaces, hyphens, and apostrophes".to_string()
        })
    })
}

pub fn validate_product_name(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Product name is required".into());
    }
    check_length("Product name", value, 2, 256)
}

pub fn validate_product_review(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Product review is required".into());
    }
    check_length("Product review", value, 10, 5000)
}

/// Only enforced while the reviewer wants to be contacted again.
pub fn validate_contact_method(value: &str, contact_again: bool) -> Option<String> {
    if contact_again && value.trim().is_empty() {
        Some("Preferred contact method is required".into())
    } else {
        None
    }
}
