use skywatch_core::{
    MAX_REFRESH_INTERVAL_MINUTES, MIN_REFRESH_INTERVAL_MINUTES, PreferencesUpdate, UserPreferences,
};
use skywatch_storage::SqliteStore;

use crate::error::{FieldError, ServiceError};

type Result<T> = std::result::Result<T, ServiceError>;

/// Singleton user preferences: units mode and refresh cadence.
pub struct PreferencesService {
    store: SqliteStore,
}

impl PreferencesService {
    #[must_use]
    pub const fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Returns the preferences row, creating it with defaults on first read.
    pub async fn get(&self) -> Result<UserPreferences> {
        Ok(self.store.get_or_create_preferences().await?)
    }

    /// Validates and applies a partial update. `units` is already
    /// enum-checked at deserialization; the refresh interval must fall in
    /// the allowed range.
    pub async fn update(&self, update: &PreferencesUpdate) -> Result<UserPreferences> {
        if let Some(minutes) = update.refresh_interval_minutes {
            if !(MIN_REFRESH_INTERVAL_MINUTES..=MAX_REFRESH_INTERVAL_MINUTES).contains(&minutes) {
                return Err(ServiceError::Validation(vec![FieldError {
                    field: "refreshIntervalMinutes",
                    message: format!(
                        "must be between {MIN_REFRESH_INTERVAL_MINUTES} and {MAX_REFRESH_INTERVAL_MINUTES}, got {minutes}"
                    ),
                }]));
            }
        }
        Ok(self.store.update_preferences(update).await?)
    }
}
