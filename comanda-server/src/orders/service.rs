//! Order Creation Service
//!
//! Creation pipeline: validate the payload, compute the authoritative total
//! from the current catalog, then persist the order while claiming the
//! table in the same transaction.

use crate::db::models::{Order, OrderCreate, OrderItem, OrderStatus};
use crate::db::repository::{OrderRepository, dining_table, employee, menu_item, parse_ref};
use crate::orders::validator::OrderValidator;
use crate::pricing::PricingEngine;
use crate::utils::{AppError, AppResult};
use chrono::Utc;
use rust_decimal::Decimal;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

/// Outcome of a successful creation
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub id: RecordId,
    pub total: Decimal,
}

#[derive(Clone)]
pub struct OrderService {
    validator: OrderValidator,
    pricing: PricingEngine,
    orders: OrderRepository,
}

impl OrderService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            validator: OrderValidator::new(db.clone()),
            pricing: PricingEngine::new(db.clone()),
            orders: OrderRepository::new(db),
        }
    }

    /// Validate, price, and persist a new order
    ///
    /// The computed total is frozen on the stored document; any total the
    /// client sent was already dropped during deserialization.
    pub async fn create_order(&self, payload: OrderCreate) -> AppResult<CreatedOrder> {
        self.validator.validate_create(&payload).await?;

        let total = self.pricing.compute_total(&payload.items).await?;

        let status = match payload.status.as_deref() {
            // Validated above; parse again to move out of the string form
            Some(raw) => OrderStatus::parse(raw)
                .ok_or_else(|| AppError::internal("Status changed after validation"))?,
            None => OrderStatus::default(),
        };

        let items = payload
            .items
            .iter()
            .map(|item| {
                let menu_item_id = parse_ref(menu_item::TABLE, &item.menu_item_id)?;
                let quantity = i32::try_from(item.quantity).map_err(|_| {
                    crate::db::repository::RepoError::Validation(
                        "Item quantity out of range".to_string(),
                    )
                })?;
                Ok(OrderItem {
                    menu_item_id,
                    quantity,
                    notes: item.notes.clone(),
                })
            })
            .collect::<Result<Vec<_>, crate::db::repository::RepoError>>()?;

        let order = Order {
            id: None,
            items,
            table_id: parse_ref(dining_table::TABLE, &payload.table_id)?,
            employee_id: parse_ref(employee::TABLE, &payload.employee_id)?,
            status,
            special_instructions: payload.special_instructions,
            total,
            created_at: Utc::now(),
        };

        let created = self.orders.create(order).await?;
        let id = created
            .id
            .ok_or_else(|| AppError::internal("Created order is missing its id"))?;

        Ok(CreatedOrder { id, total })
    }
}
