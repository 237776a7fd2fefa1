//! Repository layer for drink records.

use sea_orm::DatabaseTransaction;
use serde::{Deserialize, Serialize};

use crate::adapters::drinks_sea as adapter;
use crate::entities::drinks;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// One recipe ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: i64,
}

/// The short ingredient representation: proportions and colors only, for
/// the public menu view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientSummary {
    pub color: String,
    pub parts: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    pub fn recipe_summary(&self) -> Vec<IngredientSummary> {
        self.recipe
            .iter()
            .map(|ingredient| IngredientSummary {
                color: ingredient.color.clone(),
                parts: ingredient.parts,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateDrink {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("title must not be empty"));
    }
    Ok(())
}

fn validate_recipe(recipe: &[Ingredient]) -> Result<(), DomainError> {
    if recipe.is_empty() {
        return Err(DomainError::validation("recipe must not be empty"));
    }
    for ingredient in recipe {
        if ingredient.name.trim().is_empty() {
            return Err(DomainError::validation("ingredient name must not be empty"));
        }
        if ingredient.parts < 1 {
            return Err(DomainError::validation("ingredient parts must be positive"));
        }
    }
    Ok(())
}

fn encode_recipe(recipe: &[Ingredient]) -> Result<String, DomainError> {
    serde_json::to_string(recipe).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Serialization".to_string()),
            format!("failed to encode recipe: {e}"),
        )
    })
}

pub async fn list_drinks(txn: &DatabaseTransaction) -> Result<Vec<Drink>, DomainError> {
    adapter::list(txn)
        .await?
        .into_iter()
        .map(Drink::try_from)
        .collect()
}

pub async fn find_drink(txn: &DatabaseTransaction, id: i64) -> Result<Option<Drink>, DomainError> {
    adapter::find_by_id(txn, id)
        .await?
        .map(Drink::try_from)
        .transpose()
}

pub async fn create_drink(
    txn: &DatabaseTransaction,
    drink: NewDrink,
) -> Result<Drink, DomainError> {
    validate_title(&drink.title)?;
    validate_recipe(&drink.recipe)?;

    let recipe_json = encode_recipe(&drink.recipe)?;
    let model = adapter::insert(txn, &drink.title, &recipe_json).await?;
    Drink::try_from(model)
}

pub async fn update_drink(
    txn: &DatabaseTransaction,
    id: i64,
    update: UpdateDrink,
) -> Result<Drink, DomainError> {
    let model = adapter::find_by_id(txn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Drink, format!("Drink with id {id} not found"))
    })?;

    // A body with neither field is a no-op; return the row unchanged.
    if update.title.is_none() && update.recipe.is_none() {
        return Drink::try_from(model);
    }

    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    if let Some(recipe) = &update.recipe {
        validate_recipe(recipe)?;
    }

    let recipe_json = update.recipe.as_deref().map(encode_recipe).transpose()?;
    let model = adapter::update(txn, model, update.title, recipe_json).await?;
    Drink::try_from(model)
}

pub async fn delete_drink(txn: &DatabaseTransaction, id: i64) -> Result<(), DomainError> {
    let model = adapter::find_by_id(txn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Drink, format!("Drink with id {id} not found"))
    })?;

    adapter::delete(txn, model).await
}

impl TryFrom<drinks::Model> for Drink {
    type Error = DomainError;

    fn try_from(model: drinks::Model) -> Result<Self, Self::Error> {
        let recipe: Vec<Ingredient> = serde_json::from_str(&model.recipe).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("invalid recipe stored for drink id={}: {e}", model.id),
            )
        })?;

        Ok(Self {
            id: model.id,
            title: model.title,
            recipe,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Ingredient {
        Ingredient {
            name: "water".to_string(),
            color: "blue".to_string(),
            parts: 1,
        }
    }

    #[test]
    fn test_recipe_summary_drops_names() {
        let drink = Drink {
            id: 1,
            title: "flat white".to_string(),
            recipe: vec![
                Ingredient {
                    name: "espresso".to_string(),
                    color: "brown".to_string(),
                    parts: 1,
                },
                Ingredient {
                    name: "steamed milk".to_string(),
                    color: "white".to_string(),
                    parts: 3,
                },
            ],
        };

        let summary = drink.recipe_summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].color, "brown");
        assert_eq!(summary[1].parts, 3);
    }

    #[test]
    fn test_model_round_trip() {
        let model = drinks::Model {
            id: 7,
            title: "water".to_string(),
            recipe: r#"[{"name":"water","color":"blue","parts":1}]"#.to_string(),
        };

        let drink = Drink::try_from(model).unwrap();
        assert_eq!(drink.id, 7);
        assert_eq!(drink.recipe, vec![water()]);
    }

    #[test]
    fn test_corrupt_recipe_is_infra_error() {
        let model = drinks::Model {
            id: 7,
            title: "water".to_string(),
            recipe: "not json".to_string(),
        };

        let err = Drink::try_from(model).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Infra(InfraErrorKind::DataCorruption, _)
        ));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        assert!(validate_title("   ").is_err());
        assert!(validate_title("cortado").is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_recipe() {
        assert!(validate_recipe(&[]).is_err());
        assert!(validate_recipe(&[Ingredient {
            parts: 0,
            ..water()
        }])
        .is_err());
        assert!(validate_recipe(&[Ingredient {
            name: " ".to_string(),
            ..water()
        }])
        .is_err());
        assert!(validate_recipe(&[water()]).is_ok());
    }
}
