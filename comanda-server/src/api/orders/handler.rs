//! Order API Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{AvailableMenuItem, EnrichedOrder, OrderCreate, OrderUpdate};
use crate::db::repository::{MenuItemRepository, OrderRepository, order, parse_ref};
use crate::orders::{OrderEnricher, OrderService};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderCreated {
    message: String,
    order_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
}

/// GET /orders
///
/// All orders, oldest first, each enriched with its employee, table, and
/// per-item menu snapshots.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EnrichedOrder>>> {
    let repo = OrderRepository::new(state.get_db());
    let enricher = OrderEnricher::new(state.get_db());

    let orders = repo.find_all().await?;
    let enriched = enricher.enrich_all(orders).await?;
    Ok(Json(enriched))
}

/// GET /orders/available-items
///
/// The orderable slice of the catalog. Declared before the `{id}` route so
/// the literal segment wins.
pub async fn available_items(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<AvailableMenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_available().await?;
    Ok(Json(items))
}

/// GET /orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EnrichedOrder>> {
    let id = parse_ref(order::TABLE, &id)?;
    let repo = OrderRepository::new(state.get_db());
    let enricher = OrderEnricher::new(state.get_db());

    let found = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    let enriched = enricher.enrich(found).await?;
    Ok(Json(enriched))
}

/// POST /orders
///
/// Validates, prices, and persists the order while claiming its table.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Response> {
    let service = OrderService::new(state.get_db());
    let created = service.create_order(payload).await?;

    tracing::info!(
        order_id = %created.id,
        user = %user.id,
        "Order created"
    );

    let body = OrderCreated {
        message: "Order created successfully".to_string(),
        order_id: created.id.to_string(),
        total: created.total,
    };
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// PUT /orders/{id}
///
/// Partial update; status changes are checked against the transition table.
/// Succeeds with no body.
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<StatusCode> {
    let id = parse_ref(order::TABLE, &id)?;
    let repo = OrderRepository::new(state.get_db());

    let updated = repo.update(&id, payload).await?;
    tracing::info!(
        order_id = %id,
        status = updated.status.as_str(),
        user = %user.id,
        "Order updated"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /orders/{id}
///
/// Hard delete. The table the order claimed stays occupied.
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_ref(order::TABLE, &id)?;
    let repo = OrderRepository::new(state.get_db());

    if !repo.delete(&id).await? {
        return Err(AppError::not_found("Order not found"));
    }

    tracing::info!(order_id = %id, user = %user.id, "Order deleted");
    Ok(Json(json!({ "message": "Order deleted successfully" })))
}
