use std::collections::HashMap;

use crate::supabase;

/// First eight characters of an identity id, safe on shorter ids.
pub fn id_prefix(id: &str) -> &str {
	id.get(..8).unwrap_or(id)
}

/// Name shown for an identity with no profile row.
pub fn fallback_name(id: &str) -> String {
	format!("User {}", id_prefix(id))
}

/// Resolves author ids to display names in one batched lookup.
///
/// Lookup failures degrade to the fallback names rather than failing the
/// page.
pub async fn display_names(
	supabase: &supabase::Client,
	token: &str,
	author_ids: &[String],
) -> HashMap<String, String> {
	let mut ids = author_ids.to_vec();
	ids.sort_unstable();
	ids.dedup();

	let mut names: HashMap<String, String> = match supabase.profiles_by_ids(token, &ids).await {
		Ok(profiles) => profiles
			.into_iter()
			.map(|profile| (profile.id, profile.display_name))
			.collect(),
		Err(error) => {
			tracing::warn!(error = %error, "display name lookup failed");
			HashMap::new()
		}
	};

	for id in ids {
		names.entry(id).or_insert_with_key(|id| fallback_name(id));
	}

	names
}
