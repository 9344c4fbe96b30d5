use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::route::auth::model::{invalid, validate_display_name, validate_email, validate_password};

#[derive(Debug, Deserialize, Validate)]
pub struct EmailInput {
	#[validate(custom(function = validate_email))]
	pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = validate_new_passwords_match))]
pub struct PasswordInput {
	#[validate(custom(function = validate_password))]
	pub new_password: String,
	pub confirm_password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DisplayNameInput {
	#[validate(custom(function = validate_display_name))]
	pub display_name: String,
}

fn validate_new_passwords_match(input: &PasswordInput) -> Result<(), ValidationError> {
	if input.new_password != input.confirm_password {
		return Err(invalid("password_match", "Passwords do not match"));
	}

	Ok(())
}

#[cfg(test)]
mod test {
	use validator::Validate;

	use crate::error::validation_messages;

	use super::{DisplayNameInput, EmailInput, PasswordInput};

	#[test]
	fn test_short_password_is_rejected() {
		let input = PasswordInput {
			new_password: "abc".to_string(),
			confirm_password: "abc".to_string(),
		};

		let errors = input.validate().unwrap_err();

		assert!(validation_messages(&errors)
			.contains(&"Password must be at least 6 characters long".to_string()));
	}

	#[test]
	fn test_mismatched_passwords_are_rejected() {
		let input = PasswordInput {
			new_password: "hunter2hunter".to_string(),
			confirm_password: "hunter2hunter!".to_string(),
		};

		let errors = input.validate().unwrap_err();

		assert!(validation_messages(&errors).contains(&"Passwords do not match".to_string()));
	}

	#[test]
	fn test_matching_passwords_pass() {
		let input = PasswordInput {
			new_password: "hunter2hunter".to_string(),
			confirm_password: "hunter2hunter".to_string(),
		};

		assert!(input.validate().is_ok());
	}

	#[test]
	fn test_email_shape_is_checked() {
		let input = EmailInput {
			email: "not-an-email".to_string(),
		};

		let errors = input.validate().unwrap_err();

		assert!(validation_messages(&errors)
			.contains(&"Please enter a valid email address".to_string()));
	}

	#[test]
	fn test_display_name_characters_are_checked() {
		let input = DisplayNameInput {
			display_name: "John <script>".to_string(),
		};

		let errors = input.validate().unwrap_err();

		assert!(validation_messages(&errors).contains(
			&"Display name must contain only letters, numbers, and spaces".to_string()
		));
	}
}
