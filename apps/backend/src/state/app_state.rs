use sea_orm::DatabaseConnection;

use crate::auth::authenticator::Authenticator;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Authorization guard holding the issuer's key set cache
    pub auth: Authenticator,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth: Authenticator) -> Self {
        Self {
            db: Some(db),
            auth,
        }
    }

    /// State without a database connection, for auth-only test scenarios.
    pub fn without_db(auth: Authenticator) -> Self {
        Self { db: None, auth }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
