//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{AvailableMenuItem, MenuItem};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find menu item by record id
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<MenuItem>> {
        let item: Option<MenuItem> = self.base.db().select(id.clone()).await?;
        Ok(item)
    }

    /// Check that a menu item record exists, without touching its fields
    pub async fn exists(&self, id: &RecordId) -> RepoResult<bool> {
        self.base.exists(id).await
    }

    /// All currently orderable items, projected for the order workflow
    pub async fn find_available(&self) -> RepoResult<Vec<AvailableMenuItem>> {
        let items: Vec<AvailableMenuItem> = self
            .base
            .db()
            .query(
                "SELECT id, name, price, category, description \
                 FROM menu_item WHERE isAvailable = true ORDER BY name",
            )
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Resolve the current catalog price for one item
    ///
    /// Returns `Ok(None)` when the item does not exist. A present item whose
    /// stored price is not numeric is catalog corruption, reported as an
    /// integrity error rather than a validation failure.
    pub async fn find_price(&self, id: &RecordId) -> RepoResult<Option<Decimal>> {
        #[derive(Debug, Deserialize)]
        struct Row {
            #[serde(default)]
            price: Option<serde_json::Value>,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT price FROM $item")
            .bind(("item", id.clone()))
            .await?
            .take(0)?;

        let Some(row) = rows.into_iter().next() else {
            return Ok(None);
        };

        let price = match row.price {
            Some(serde_json::Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    Some(Decimal::from(i))
                } else {
                    n.as_f64().and_then(Decimal::from_f64)
                }
            }
            _ => None,
        };

        price.map(Some).ok_or_else(|| {
            RepoError::Integrity(format!("Menu item {} has a non-numeric price", id))
        })
    }

    /// Create a new menu item (seed and test data)
    pub async fn create(&self, item: MenuItem) -> RepoResult<MenuItem> {
        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }
}
