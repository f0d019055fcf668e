//! Profile operations for the Dashboard.

use log::info;

use super::Dashboard;
use crate::{error::Result, models::Profile, params::UpdateProfile};

impl Dashboard {
    /// Returns the user's saved profile, or `None` before the first save.
    pub async fn profile(&self) -> Result<Option<Profile>> {
        self.with_db(|db, user_id| db.get_profile(user_id)).await
    }

    /// Saves the given profile fields, creating the profile if needed.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::InvalidInput` when no field is given.
    pub async fn update_profile(&self, params: &UpdateProfile) -> Result<Profile> {
        let (full_name, company) = params.validate()?;

        let profile = self
            .with_db(move |db, user_id| db.upsert_profile(user_id, full_name, company))
            .await?;
        info!("Updated profile for {}", profile.user_id);
        Ok(profile)
    }
}
