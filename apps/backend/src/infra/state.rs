use migration::{Migrator, MigratorTrait};

use crate::auth::authenticator::Authenticator;
use crate::config::auth::AuthConfig;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    auth_config: Option<AuthConfig>,
    database_url: Option<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            auth_config: None,
            database_url: None,
        }
    }

    pub fn with_db_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = Some(database_url.into());
        self
    }

    pub fn with_auth(mut self, auth_config: AuthConfig) -> Self {
        self.auth_config = Some(auth_config);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let auth_config = self.auth_config.unwrap_or_else(AuthConfig::from_env);
        let auth = Authenticator::from_config(auth_config)?;

        if let Some(url) = self.database_url {
            // single entrypoint: connect + migrate
            let conn = connect_db(&url).await?;
            Migrator::up(&conn, None).await?;
            Ok(AppState::new(conn, auth))
        } else {
            Ok(AppState::without_db(auth))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db() {
        let state = build_state()
            .with_auth(AuthConfig::new("issuer.example.com", "coffee_shop"))
            .build()
            .await
            .unwrap();
        assert!(state.db().is_none());
    }
}
