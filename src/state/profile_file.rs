use std::fs;
use std::path::Path;

use serde_json::error::Category;
use tracing::debug;

use crate::error::{FitError, Result};
use crate::models::UserProfile;

/// Load a profile from a JSON file and validate it.
///
/// Enum fields accept the same aliases as the command line. Unknown values
/// fail with `InvalidInput`; malformed JSON fails with `Json`.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content).map_err(|e| match e.classify() {
        // Well-formed JSON with bad values is a user input problem
        Category::Data => FitError::InvalidInput(format!("{}: {e}", path.display())),
        _ => FitError::Json(e),
    })?;
    profile.validate()?;

    debug!(path = %path.display(), "loaded profile");
    Ok(profile)
}
