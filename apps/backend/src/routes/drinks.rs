//! Drink CRUD routes.
//!
//! `GET /drinks` is public; every other route guards itself by calling the
//! authenticator with its required permission before touching the database.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::drinks::{self, Drink, Ingredient, IngredientSummary, NewDrink, UpdateDrink};
use crate::state::app_state::AppState;

const PERM_GET_DRINKS_DETAIL: &str = "get:drinks-detail";
const PERM_POST_DRINKS: &str = "post:drinks";
const PERM_PATCH_DRINKS: &str = "patch:drinks";
const PERM_DELETE_DRINKS: &str = "delete:drinks";

/// Public menu representation: colors and proportions only.
#[derive(Debug, Serialize)]
struct DrinkSummary {
    id: i64,
    title: String,
    recipe: Vec<IngredientSummary>,
}

impl From<Drink> for DrinkSummary {
    fn from(drink: Drink) -> Self {
        Self {
            recipe: drink.recipe_summary(),
            id: drink.id,
            title: drink.title,
        }
    }
}

/// Full representation including ingredient names.
#[derive(Debug, Serialize)]
struct DrinkDetail {
    id: i64,
    title: String,
    recipe: Vec<Ingredient>,
}

impl From<Drink> for DrinkDetail {
    fn from(drink: Drink) -> Self {
        Self {
            id: drink.id,
            title: drink.title,
            recipe: drink.recipe,
        }
    }
}

#[derive(Debug, Serialize)]
struct DrinksResponse<T> {
    success: bool,
    drinks: Vec<T>,
}

impl<T> DrinksResponse<T> {
    fn new(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
    delete: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateDrinkRequest {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDrinkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub recipe: Option<Vec<Ingredient>>,
}

async fn list_drinks(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let drinks = with_txn(&app_state, |txn| {
        Box::pin(async move { drinks::list_drinks(txn).await.map_err(AppError::from) })
    })
    .await?;

    let drinks: Vec<DrinkSummary> = drinks.into_iter().map(DrinkSummary::from).collect();
    Ok(HttpResponse::Ok().json(DrinksResponse::new(drinks)))
}

async fn drinks_detail(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state
        .auth
        .authorize(
            req.headers().get(header::AUTHORIZATION),
            PERM_GET_DRINKS_DETAIL,
        )
        .await?;

    let drinks = with_txn(&app_state, |txn| {
        Box::pin(async move { drinks::list_drinks(txn).await.map_err(AppError::from) })
    })
    .await?;

    let drinks: Vec<DrinkDetail> = drinks.into_iter().map(DrinkDetail::from).collect();
    Ok(HttpResponse::Ok().json(DrinksResponse::new(drinks)))
}

async fn create_drink(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    app_state
        .auth
        .authorize(req.headers().get(header::AUTHORIZATION), PERM_POST_DRINKS)
        .await?;

    let payload = body.into_inner();
    let new_drink = NewDrink {
        title: payload.title,
        recipe: payload.recipe,
    };

    let drink = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            drinks::create_drink(txn, new_drink)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(drink_id = drink.id, "drink created");
    Ok(HttpResponse::Ok().json(DrinksResponse::new(vec![DrinkDetail::from(drink)])))
}

async fn update_drink(
    req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    app_state
        .auth
        .authorize(req.headers().get(header::AUTHORIZATION), PERM_PATCH_DRINKS)
        .await?;

    let id = path.into_inner();
    let payload = body.into_inner();
    let update = UpdateDrink {
        title: payload.title,
        recipe: payload.recipe,
    };

    let drink = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            drinks::update_drink(txn, id, update)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DrinksResponse::new(vec![DrinkDetail::from(drink)])))
}

async fn delete_drink(
    req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state
        .auth
        .authorize(req.headers().get(header::AUTHORIZATION), PERM_DELETE_DRINKS)
        .await?;

    let id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { drinks::delete_drink(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    tracing::info!(drink_id = id, "drink deleted");
    Ok(HttpResponse::Ok().json(DeleteResponse {
        success: true,
        delete: id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/drinks")
            .route(web::get().to(list_drinks))
            .route(web::post().to(create_drink)),
    )
    .service(web::resource("/drinks-detail").route(web::get().to(drinks_detail)))
    .service(
        web::resource("/drinks/{id}")
            .route(web::patch().to(update_drink))
            .route(web::delete().to(delete_drink)),
    );
}
