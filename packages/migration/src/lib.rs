pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::{DatabaseConnection, DbErr};

mod m20260115_000001_create_drinks; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260115_000001_create_drinks::Migration)]
    }
}

/// Get the version string of the latest applied migration.
/// Returns None if no migrations have been applied or the migration table
/// doesn't exist yet.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}
