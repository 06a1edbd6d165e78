pub mod types;
pub mod params;
pub mod config;
pub mod claims;
pub mod admin;

use claims::ClaimsAdmin;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub claims_admin: Arc<dyn ClaimsAdmin>,
}

impl AppState {
    pub fn new<A>(claims_admin: A) -> Arc<Self>
    where
        A: ClaimsAdmin + 'static,
    {
        Arc::new(Self {
            claims_admin: Arc::new(claims_admin),
        })
    }
}
