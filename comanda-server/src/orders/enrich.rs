//! Order Enrichment
//!
//! Read-side composition: joins a raw order with projections of its
//! employee, table, and per-item menu items. This is a partial view by
//! contract - a dangling reference yields `null` for that sub-object
//! instead of failing the read. Infrastructure errors still propagate.
//!
//! The per-item menu snapshot carries the catalog's *current* price, which
//! may diverge from the frozen `total` computed at creation time.

use crate::db::models::{
    EmployeeSnapshot, EnrichedOrder, EnrichedOrderItem, MenuItemSnapshot, Order, TableSnapshot,
};
use crate::db::repository::{
    DiningTableRepository, EmployeeRepository, MenuItemRepository, RepoResult,
};
use futures::future::join_all;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Builds denormalized order views
#[derive(Clone)]
pub struct OrderEnricher {
    employees: EmployeeRepository,
    tables: DiningTableRepository,
    menu_items: MenuItemRepository,
}

impl OrderEnricher {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            employees: EmployeeRepository::new(db.clone()),
            tables: DiningTableRepository::new(db.clone()),
            menu_items: MenuItemRepository::new(db),
        }
    }

    /// Enrich a single raw order
    ///
    /// The employee and table lookups run concurrently, as do the per-item
    /// menu lookups; they are read-only and independent.
    pub async fn enrich(&self, order: Order) -> RepoResult<EnrichedOrder> {
        let id = order.id.clone().ok_or_else(|| {
            crate::db::repository::RepoError::Database("Stored order is missing its id".to_string())
        })?;

        let (employee, table) = tokio::join!(
            self.employees.find_by_id(&order.employee_id),
            self.tables.find_by_id(&order.table_id),
        );
        let employee = employee?.map(|e| EmployeeSnapshot {
            name: e.full_name(),
            role: e.role,
        });
        let table = table?.map(|t| TableSnapshot {
            table_number: t.table_number,
            location: t.location,
        });

        let lookups = order
            .items
            .iter()
            .map(|item| self.menu_items.find_by_id(&item.menu_item_id));
        let snapshots = join_all(lookups).await;

        let mut items = Vec::with_capacity(order.items.len());
        for (item, snapshot) in order.items.into_iter().zip(snapshots) {
            let menu_item = snapshot?.map(|m| MenuItemSnapshot {
                name: m.name,
                price: m.price,
            });
            items.push(EnrichedOrderItem {
                menu_item_id: item.menu_item_id,
                quantity: item.quantity,
                notes: item.notes,
                menu_item,
            });
        }

        Ok(EnrichedOrder {
            id,
            items,
            table_id: order.table_id,
            employee_id: order.employee_id,
            status: order.status,
            special_instructions: order.special_instructions,
            total: order.total,
            created_at: order.created_at,
            employee,
            table,
        })
    }

    /// Enrich a list of raw orders, preserving order
    pub async fn enrich_all(&self, orders: Vec<Order>) -> RepoResult<Vec<EnrichedOrder>> {
        let mut enriched = Vec::with_capacity(orders.len());
        for order in orders {
            enriched.push(self.enrich(order).await?);
        }
        Ok(enriched)
    }
}
