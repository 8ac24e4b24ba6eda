//! Field validation for account forms

/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 7;

/// Blank after trimming
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `local@domain.tld` with no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Digits with an optional leading `+`, spaces and dashes allowed
pub fn is_valid_phone(phone: &str) -> bool {
    let body = phone.trim();
    let body = body.strip_prefix('+').unwrap_or(body);
    if !body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return false;
    }
    body.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
