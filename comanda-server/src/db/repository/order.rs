//! Order Repository
//!
//! Creation runs as a single transaction that claims the referenced table
//! (`status = 'occupied'`) together with the order insert, so a failed
//! insert never strands an occupied table. Updates enforce the status
//! state machine; deletes are hard deletes and do not release the table.

use super::{BaseRepository, RepoError, RepoResult, dining_table, menu_item, parse_ref};
use crate::db::models::{Order, OrderItem, OrderStatus, OrderUpdate};
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

/// Partial document merged into an existing order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderMerge {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<OrderStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::db::models::serde_helpers::option_record_id"
    )]
    table_id: Option<RecordId>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::db::models::serde_helpers::option_record_id"
    )]
    employee_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Vec<OrderItem>>,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch all raw orders, oldest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY createdAt")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Fetch one raw order
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(id.clone()).await?;
        Ok(order)
    }

    /// Persist a validated, priced order and claim its table in one transaction
    ///
    /// The table-status transition and the insert commit or roll back
    /// together; two concurrent creations against the same table still both
    /// succeed (there is deliberately no double-booking detection).
    pub async fn create(&self, mut order: Order) -> RepoResult<Order> {
        let id = RecordId::from_table_key(TABLE, uuid::Uuid::new_v4().simple().to_string());
        order.id = None;
        let table_id = order.table_id.clone();

        self.base
            .db()
            .query(
                "BEGIN TRANSACTION; \
                 UPDATE $table SET status = 'occupied'; \
                 CREATE $id CONTENT $order; \
                 COMMIT TRANSACTION;",
            )
            .bind(("table", table_id))
            .bind(("id", id.clone()))
            .bind(("order", order))
            .await?
            .check()?;

        let created: Option<Order> = self.base.db().select(id.clone()).await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create order {}", id)))
    }

    /// Apply a partial update
    ///
    /// Status changes go through the transition table; changed identifiers
    /// are re-parsed but not re-checked for existence, and item changes do
    /// not recompute the frozen total.
    pub async fn update(&self, id: &RecordId, update: OrderUpdate) -> RepoResult<Order> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        let status = match update.status.as_deref() {
            Some(raw) => {
                let next = OrderStatus::parse(raw).ok_or_else(|| {
                    RepoError::Validation(format!(
                        "\"status\" must be one of: {}",
                        OrderStatus::ALL.join(", ")
                    ))
                })?;
                if !existing.status.can_transition_to(next) {
                    return Err(RepoError::Validation(format!(
                        "Illegal status transition: {} -> {}",
                        existing.status.as_str(),
                        next.as_str()
                    )));
                }
                Some(next)
            }
            None => None,
        };

        let table_id = update
            .table_id
            .map(|raw| parse_ref(dining_table::TABLE, &raw))
            .transpose()?;
        let employee_id = update
            .employee_id
            .map(|raw| parse_ref(super::employee::TABLE, &raw))
            .transpose()?;

        let items = update
            .items
            .map(|items| {
                items
                    .into_iter()
                    .map(|item| {
                        let menu_item_id = parse_ref(menu_item::TABLE, &item.menu_item_id)?;
                        let quantity = i32::try_from(item.quantity).map_err(|_| {
                            RepoError::Validation("Item quantity out of range".to_string())
                        })?;
                        Ok(OrderItem {
                            menu_item_id,
                            quantity,
                            notes: item.notes,
                        })
                    })
                    .collect::<RepoResult<Vec<_>>>()
            })
            .transpose()?;

        let merge = OrderMerge {
            status,
            table_id,
            employee_id,
            items,
        };

        let updated: Option<Order> = self.base.db().update(id.clone()).merge(merge).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Hard delete; the table's occupied status is intentionally left as is
    pub async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let deleted: Option<Order> = self.base.db().delete(id.clone()).await?;
        Ok(deleted.is_some())
    }
}
