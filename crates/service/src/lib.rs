//! Service layer for skywatch
//!
//! Centralizes business logic between the HTTP handlers and storage/provider:
//! location creation with geocoding and duplicate detection, bulk sync with
//! per-location failure isolation, and preferences validation.

mod error;
mod location_service;
mod preferences_service;

pub use error::{FieldError, ServiceError};
pub use location_service::{LocationService, SyncReport, SyncResult, SyncStatus};
pub use preferences_service::PreferencesService;
