use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError};

static EMAIL_SHAPE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex should compile"));

pub(crate) fn invalid(code: &'static str, message: &'static str) -> ValidationError {
	let mut error = ValidationError::new(code);
	error.message = Some(message.into());
	error
}

/// Checks run in order so the user sees the most basic problem first.
pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
	let email = email.trim();

	if email.is_empty() {
		return Err(invalid("email_required", "Email is required"));
	}

	if !EMAIL_SHAPE.is_match(email) {
		return Err(invalid("email_shape", "Please enter a valid email address"));
	}

	Ok(())
}

pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
	if password.is_empty() {
		return Err(invalid("password_required", "Password is required"));
	}

	if password.chars().count() < 6 {
		return Err(invalid(
			"password_length",
			"Password must be at least 6 characters long",
		));
	}

	Ok(())
}

pub(crate) fn validate_display_name(name: &str) -> Result<(), ValidationError> {
	let name = name.trim();

	if name.is_empty() {
		return Err(invalid("display_name_required", "Display name is required"));
	}

	if name.chars().count() < 2 {
		return Err(invalid(
			"display_name_min",
			"Display name must be at least 2 characters long",
		));
	}

	if name.chars().count() > 50 {
		return Err(invalid(
			"display_name_max",
			"Display name must be at most 50 characters long",
		));
	}

	if !name
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
	{
		return Err(invalid(
			"display_name_charset",
			"Display name must contain only letters, numbers, and spaces",
		));
	}

	Ok(())
}

fn validate_password_present(password: &str) -> Result<(), ValidationError> {
	if password.is_empty() {
		return Err(invalid("password_required", "Password is required"));
	}

	Ok(())
}

fn validate_passwords_match(input: &SignUpInput) -> Result<(), ValidationError> {
	if input.password != input.confirm_password {
		return Err(invalid("password_match", "Passwords do not match"));
	}

	Ok(())
}

#[derive(Deserialize, Validate)]
pub struct SignInInput {
	#[validate(custom(function = validate_email))]
	pub email: String,
	#[validate(custom(function = validate_password_present))]
	pub password: String,
}

#[derive(Deserialize, Validate)]
#[validate(schema(function = validate_passwords_match))]
pub struct SignUpInput {
	#[validate(custom(function = validate_display_name))]
	pub display_name: String,
	#[validate(custom(function = validate_email))]
	pub email: String,
	#[validate(custom(function = validate_password))]
	pub password: String,
	pub confirm_password: String,
}
