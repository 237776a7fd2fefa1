//! SeaORM adapter for the drinks repository.

use sea_orm::{
    ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait, ModelTrait, NotSet, QueryOrder,
    Set, SqlErr,
};

use crate::entities::drinks;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

fn db_error(context: &str, e: DbErr) -> DomainError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return DomainError::conflict(
            ConflictKind::UniqueTitle,
            "A drink with this title already exists",
        );
    }
    DomainError::infra(
        InfraErrorKind::Other("Database error".to_string()),
        format!("{context}: {e}"),
    )
}

pub async fn list(txn: &DatabaseTransaction) -> Result<Vec<drinks::Model>, DomainError> {
    drinks::Entity::find()
        .order_by_asc(drinks::Column::Id)
        .all(txn)
        .await
        .map_err(|e| db_error("failed to list drinks", e))
}

pub async fn find_by_id(
    txn: &DatabaseTransaction,
    id: i64,
) -> Result<Option<drinks::Model>, DomainError> {
    drinks::Entity::find_by_id(id)
        .one(txn)
        .await
        .map_err(|e| db_error("failed to load drink", e))
}

pub async fn insert(
    txn: &DatabaseTransaction,
    title: &str,
    recipe_json: &str,
) -> Result<drinks::Model, DomainError> {
    let drink = drinks::ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        recipe: Set(recipe_json.to_string()),
    };

    drink
        .insert(txn)
        .await
        .map_err(|e| db_error("failed to insert drink", e))
}

pub async fn update(
    txn: &DatabaseTransaction,
    model: drinks::Model,
    title: Option<String>,
    recipe_json: Option<String>,
) -> Result<drinks::Model, DomainError> {
    let mut drink: drinks::ActiveModel = model.into();
    if let Some(title) = title {
        drink.title = Set(title);
    }
    if let Some(recipe_json) = recipe_json {
        drink.recipe = Set(recipe_json);
    }

    drink
        .update(txn)
        .await
        .map_err(|e| db_error("failed to update drink", e))
}

pub async fn delete(txn: &DatabaseTransaction, model: drinks::Model) -> Result<(), DomainError> {
    model
        .delete(txn)
        .await
        .map_err(|e| db_error("failed to delete drink", e))?;
    Ok(())
}
