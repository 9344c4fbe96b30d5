use axum::{extract::State, Form};
use chrono::Utc;
use maud::{html, Markup};
use validator::Validate;

use crate::{
	error::validation_messages,
	extract::Session,
	render::{error_block, nav, page_shell, success_block},
	supabase::{self, model::ProfileRename},
};

use super::model;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
	Email,
	Password,
	DisplayName,
}

/// Outcome of a settings form submit, shown inside that form's card.
struct Feedback {
	section: Section,
	errors: Vec<String>,
	message: Option<String>,
}

/// Account settings
/// Current account details and the three update forms.
pub async fn page(State(supabase): State<supabase::Client>, session: Session) -> Markup {
	let display_name = current_display_name(&supabase, &session).await;

	account_page(&session, &display_name, None)
}

/// Change email
/// Asks the auth service to start the email change; the new address only
/// takes effect once its confirmation link is followed.
pub async fn update_email(
	State(supabase): State<supabase::Client>,
	session: Session,
	Form(input): Form<model::EmailInput>,
) -> Markup {
	let display_name = current_display_name(&supabase, &session).await;

	if let Err(errors) = input.validate() {
		let feedback = Feedback {
			section: Section::Email,
			errors: validation_messages(&errors),
			message: None,
		};

		return account_page(&session, &display_name, Some(&feedback));
	}

	let feedback = match supabase
		.update_email(&session.token, input.email.trim())
		.await
	{
		Ok(()) => Feedback {
			section: Section::Email,
			errors: Vec::new(),
			message: Some(
				"Check your email for the confirmation link to update your email address!"
					.to_string(),
			),
		},
		Err(error) => Feedback {
			section: Section::Email,
			errors: vec![error.message()],
			message: None,
		},
	};

	account_page(&session, &display_name, Some(&feedback))
}

/// Change password
pub async fn update_password(
	State(supabase): State<supabase::Client>,
	session: Session,
	Form(input): Form<model::PasswordInput>,
) -> Markup {
	let display_name = current_display_name(&supabase, &session).await;

	if let Err(errors) = input.validate() {
		let feedback = Feedback {
			section: Section::Password,
			errors: validation_messages(&errors),
			message: None,
		};

		return account_page(&session, &display_name, Some(&feedback));
	}

	let feedback = match supabase
		.update_password(&session.token, &input.new_password)
		.await
	{
		Ok(()) => Feedback {
			section: Section::Password,
			errors: Vec::new(),
			message: Some("Password updated successfully!".to_string()),
		},
		Err(error) => Feedback {
			section: Section::Password,
			errors: vec![error.message()],
			message: None,
		},
	};

	account_page(&session, &display_name, Some(&feedback))
}

/// Change display name
/// Upserts the profile row; every page shows the new name from here on.
pub async fn update_display_name(
	State(supabase): State<supabase::Client>,
	session: Session,
	Form(input): Form<model::DisplayNameInput>,
) -> Markup {
	if let Err(errors) = input.validate() {
		let display_name = current_display_name(&supabase, &session).await;
		let feedback = Feedback {
			section: Section::DisplayName,
			errors: validation_messages(&errors),
			message: None,
		};

		return account_page(&session, &display_name, Some(&feedback));
	}

	let rename = ProfileRename {
		id: &session.user.id,
		display_name: input.display_name.trim(),
		updated_at: Utc::now(),
	};

	let feedback = match supabase.rename_profile(&session.token, &rename).await {
		Ok(()) => Feedback {
			section: Section::DisplayName,
			errors: Vec::new(),
			message: Some("Display name updated successfully!".to_string()),
		},
		Err(error) => Feedback {
			section: Section::DisplayName,
			errors: vec![error.message()],
			message: None,
		},
	};

	let display_name = current_display_name(&supabase, &session).await;

	account_page(&session, &display_name, Some(&feedback))
}

async fn current_display_name(supabase: &supabase::Client, session: &Session) -> String {
	match supabase.profile(&session.token, &session.user.id).await {
		Ok(Some(profile)) => profile.display_name,
		Ok(None) => "Not set".to_string(),
		Err(error) => {
			tracing::warn!(error = %error, "profile lookup failed");
			"Not set".to_string()
		}
	}
}

fn section_alerts(feedback: Option<&Feedback>, section: Section) -> Markup {
	html! {
		@if let Some(feedback) = feedback {
			@if feedback.section == section {
				(error_block(&feedback.errors))
				@if let Some(message) = &feedback.message {
					(success_block(message))
				}
			}
		}
	}
}

fn account_page(session: &Session, display_name: &str, feedback: Option<&Feedback>) -> Markup {
	let email = session.user.email.as_deref().unwrap_or("");

	page_shell(
		"Account Settings | Blogger",
		html! {
			(nav())
			div class="toolbar" {
				h1 class="page-title" style="margin-bottom:0" { "Account Settings" }
				a class="btn btn-blue" href="/" { "← Back to Home" }
			}
			div class="card" {
				h2 { "Current Account" }
				p class="muted" { "Email: " (email) }
				p class="muted" { "Display Name: " (display_name) }
			}
			div class="card" {
				h2 { "Change Email Address" }
				(section_alerts(feedback, Section::Email))
				form method="post" action="/account/email" {
					label for="email" { "Email Address*" }
					input type="email" id="email" name="email" value=(email)
						placeholder="Enter your new email address" required;
					button type="submit" class="btn btn-blue" { "Update Email" }
				}
			}
			div class="card" {
				h2 { "Change Password" }
				(section_alerts(feedback, Section::Password))
				form method="post" action="/account/password" {
					label for="new_password" { "New Password*" }
					input type="password" id="new_password" name="new_password" required;
					label for="confirm_password" { "Confirm New Password*" }
					input type="password" id="confirm_password" name="confirm_password" required;
					button type="submit" class="btn btn-blue" { "Update Password" }
				}
			}
			div class="card" {
				h2 { "Change Display Name" }
				(section_alerts(feedback, Section::DisplayName))
				form method="post" action="/account/display-name" {
					label for="display_name" { "New Display Name*" }
					input type="text" id="display_name" name="display_name" required;
					button type="submit" class="btn btn-purple" { "Update Display Name" }
				}
			}
		},
	)
}
