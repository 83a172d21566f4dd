use regex::Regex;

use crate::errors::AppError;

pub const MAX_NAME_LEN: usize = 50;
const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

// Optional country-code plus, then digit groups split by spaces, hyphens or parentheses.
const PHONE_SHAPE: &str = r"^\+?\(?\d[\d\s()-]*\d$";

pub enum ValidationReq {}

impl ValidationReq {
    pub fn name_req() -> String {
        format!("Name is required and must not exceed {MAX_NAME_LEN} characters")
    }

    pub fn number_req() -> String {
        format!(
            "Please enter a valid phone number with {MIN_DIGITS} to {MAX_DIGITS} digits. \
            Example: +380 501234567"
        )
    }
}

pub fn validate_name(name: &str) -> Result<(), AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(ValidationReq::name_req()));
    }
    Ok(())
}

pub fn validate_number(number: &str) -> Result<(), AppError> {
    let number = number.trim();
    let digits = number.chars().filter(|c| c.is_ascii_digit()).count();

    let re = Regex::new(PHONE_SHAPE)?;

    if !re.is_match(number) || !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        return Err(AppError::Validation(ValidationReq::number_req()));
    }
    Ok(())
}

/// Checks a form submission and returns the trimmed `(name, number)` pair.
pub fn validate_contact_input(name: &str, number: &str) -> Result<(String, String), AppError> {
    validate_name(name)?;
    validate_number(number)?;
    Ok((name.trim().to_string(), number.trim().to_string()))
}
