//! Calls against the row store.
//!
//! Ownership is enforced here rather than trusted from the page: updates and
//! deletes filter on `author_id` as well as `id`, and ask the store to return
//! the affected rows so a miss is distinguishable from a success.

use reqwest::Method;

use super::{
	check,
	model::{NewPost, NewProfile, Post, PostPatch, Profile, ProfileRename},
	Client, Error,
};

impl Client {
	/// Every post, newest first.
	pub async fn posts(&self, token: &str) -> Result<Vec<Post>, Error> {
		let response = self
			.request(Method::GET, format!("{}/rest/v1/posts", self.base_url), token)
			.query(&[("select", "*"), ("order", "created_at.desc")])
			.send()
			.await?;

		Ok(check(response).await?.json().await?)
	}

	/// One author's posts, newest first.
	pub async fn posts_by_author(&self, token: &str, author_id: &str) -> Result<Vec<Post>, Error> {
		let author = format!("eq.{author_id}");
		let response = self
			.request(Method::GET, format!("{}/rest/v1/posts", self.base_url), token)
			.query(&[
				("select", "*"),
				("order", "created_at.desc"),
				("author_id", author.as_str()),
			])
			.send()
			.await?;

		Ok(check(response).await?.json().await?)
	}

	pub async fn post(&self, token: &str, id: &str) -> Result<Option<Post>, Error> {
		let filter = format!("eq.{id}");
		let response = self
			.request(Method::GET, format!("{}/rest/v1/posts", self.base_url), token)
			.query(&[("select", "*"), ("id", filter.as_str())])
			.send()
			.await?;

		let posts: Vec<Post> = check(response).await?.json().await?;

		Ok(posts.into_iter().next())
	}

	pub async fn create_post(&self, token: &str, post: &NewPost<'_>) -> Result<Post, Error> {
		let response = self
			.request(Method::POST, format!("{}/rest/v1/posts", self.base_url), token)
			.header("Prefer", "return=representation")
			.json(post)
			.send()
			.await?;

		let mut posts: Vec<Post> = check(response).await?.json().await?;

		if posts.is_empty() {
			return Err(Error::Service(
				"The backend did not return the created post.".to_string(),
			));
		}

		Ok(posts.remove(0))
	}

	/// Returns `None` when no row matched, i.e. the post does not exist or
	/// belongs to someone else.
	pub async fn update_post(
		&self,
		token: &str,
		id: &str,
		author_id: &str,
		patch: &PostPatch<'_>,
	) -> Result<Option<Post>, Error> {
		let id = format!("eq.{id}");
		let author = format!("eq.{author_id}");
		let response = self
			.request(Method::PATCH, format!("{}/rest/v1/posts", self.base_url), token)
			.query(&[("id", id.as_str()), ("author_id", author.as_str())])
			.header("Prefer", "return=representation")
			.json(patch)
			.send()
			.await?;

		let posts: Vec<Post> = check(response).await?.json().await?;

		Ok(posts.into_iter().next())
	}

	/// Returns whether a row was actually removed.
	pub async fn delete_post(&self, token: &str, id: &str, author_id: &str) -> Result<bool, Error> {
		let id = format!("eq.{id}");
		let author = format!("eq.{author_id}");
		let response = self
			.request(Method::DELETE, format!("{}/rest/v1/posts", self.base_url), token)
			.query(&[("id", id.as_str()), ("author_id", author.as_str())])
			.header("Prefer", "return=representation")
			.send()
			.await?;

		let posts: Vec<Post> = check(response).await?.json().await?;

		Ok(!posts.is_empty())
	}

	pub async fn profile(&self, token: &str, id: &str) -> Result<Option<Profile>, Error> {
		let filter = format!("eq.{id}");
		let response = self
			.request(Method::GET, format!("{}/rest/v1/users", self.base_url), token)
			.query(&[("select", "*"), ("id", filter.as_str())])
			.send()
			.await?;

		let profiles: Vec<Profile> = check(response).await?.json().await?;

		Ok(profiles.into_iter().next())
	}

	/// Profiles for a batch of user ids, in no particular order. Ids absent
	/// from the store are simply missing from the result.
	pub async fn profiles_by_ids(&self, token: &str, ids: &[String]) -> Result<Vec<Profile>, Error> {
		if ids.is_empty() {
			return Ok(Vec::new());
		}

		let filter = format!("in.({})", ids.join(","));
		let response = self
			.request(Method::GET, format!("{}/rest/v1/users", self.base_url), token)
			.query(&[("select", "*"), ("id", filter.as_str())])
			.send()
			.await?;

		Ok(check(response).await?.json().await?)
	}

	pub async fn create_profile(&self, token: &str, profile: &NewProfile<'_>) -> Result<(), Error> {
		let response = self
			.request(Method::POST, format!("{}/rest/v1/users", self.base_url), token)
			.json(profile)
			.send()
			.await?;

		check(response).await?;

		Ok(())
	}

	/// Insert-or-update on the profile's primary key.
	pub async fn rename_profile(&self, token: &str, rename: &ProfileRename<'_>) -> Result<(), Error> {
		let response = self
			.request(Method::POST, format!("{}/rest/v1/users", self.base_url), token)
			.header("Prefer", "resolution=merge-duplicates")
			.json(rename)
			.send()
			.await?;

		check(response).await?;

		Ok(())
	}
}
