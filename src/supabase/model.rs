//! Wire types for the hosted backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity as the auth service reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
	pub id: String,
	pub email: Option<String>,
	#[serde(default)]
	pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
	pub display_name: Option<String>,
}

/// A live session issued by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
	pub access_token: String,
	pub user: AuthUser,
}

/// Outcome of a sign-up request, which depends on project configuration.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SignUp {
	/// Addresses are auto-confirmed: a session is live immediately.
	Confirmed(AuthSession),
	/// The user must follow the confirmation link sent to their inbox.
	Pending(AuthUser),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
	pub id: String,
	pub author_id: String,
	pub title: String,
	pub content: String,
	pub image_url: Option<String>,
	pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewPost<'a> {
	pub title: &'a str,
	pub content: &'a str,
	pub image_url: Option<&'a str>,
	pub author_id: &'a str,
}

/// Full-field replacement; the edit form always submits every column.
#[derive(Debug, Serialize)]
pub struct PostPatch<'a> {
	pub title: &'a str,
	pub content: &'a str,
	pub image_url: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
	pub id: String,
	pub display_name: String,
	pub email: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NewProfile<'a> {
	pub id: &'a str,
	pub display_name: &'a str,
	pub email: Option<&'a str>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Upsert payload for renames; only the name and timestamp move.
#[derive(Debug, Serialize)]
pub struct ProfileRename<'a> {
	pub id: &'a str,
	pub display_name: &'a str,
	pub updated_at: DateTime<Utc>,
}
