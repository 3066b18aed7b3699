//! Pricing Engine
//!
//! Computes the authoritative order total from the current catalog. The
//! client never supplies a total; whatever it sends is discarded before the
//! payload reaches this module.

use crate::db::models::OrderItemInput;
use crate::db::repository::{MenuItemRepository, RepoError, RepoResult, menu_item, parse_ref};
use rust_decimal::{Decimal, RoundingStrategy};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Server-side order pricing
#[derive(Clone)]
pub struct PricingEngine {
    menu_items: MenuItemRepository,
}

impl PricingEngine {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            menu_items: MenuItemRepository::new(db),
        }
    }

    /// Sum `price x quantity` over the payload items, rounded half-up to 2dp
    ///
    /// A missing menu item is a validation failure (dangling reference); a
    /// present item with a non-numeric stored price surfaces as an integrity
    /// error from the repository.
    pub async fn compute_total(&self, items: &[OrderItemInput]) -> RepoResult<Decimal> {
        let mut total = Decimal::ZERO;

        for item in items {
            let id = parse_ref(menu_item::TABLE, &item.menu_item_id)?;
            let price = self.menu_items.find_price(&id).await?.ok_or_else(|| {
                RepoError::Validation(format!("Menu item '{}' does not exist.", item.menu_item_id))
            })?;
            total += price * Decimal::from(item.quantity);
        }

        Ok(total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::MenuItem;

    async fn setup() -> (Surreal<Db>, PricingEngine) {
        let service = DbService::memory().await.expect("in-memory db");
        let engine = PricingEngine::new(service.db.clone());
        (service.db, engine)
    }

    async fn insert_item(db: &Surreal<Db>, price: Decimal) -> String {
        let repo = MenuItemRepository::new(db.clone());
        let item = repo
            .create(MenuItem {
                id: None,
                name: "Test Dish".to_string(),
                price,
                description: "A dish for testing".to_string(),
                category: "Test".to_string(),
                is_available: true,
            })
            .await
            .expect("create menu item");
        item.id.expect("created item has id").to_string()
    }

    #[tokio::test]
    async fn test_total_is_price_times_quantity_rounded() {
        let (db, engine) = setup().await;
        let id = insert_item(&db, Decimal::new(999, 2)).await; // 9.99

        let items = vec![OrderItemInput {
            menu_item_id: id,
            quantity: 3,
            notes: None,
        }];
        let total = engine.compute_total(&items).await.expect("pricing");
        assert_eq!(total, Decimal::new(2997, 2)); // 29.97
    }

    #[tokio::test]
    async fn test_half_up_rounding() {
        let (db, engine) = setup().await;
        // 3 x 1.135 = 3.405, half-up -> 3.41
        let id = insert_item(&db, Decimal::new(1135, 3)).await;

        let items = vec![OrderItemInput {
            menu_item_id: id,
            quantity: 3,
            notes: None,
        }];
        let total = engine.compute_total(&items).await.expect("pricing");
        assert_eq!(total, Decimal::new(341, 2));
    }

    #[tokio::test]
    async fn test_missing_item_is_validation_failure() {
        let (_db, engine) = setup().await;
        let items = vec![OrderItemInput {
            menu_item_id: "menu_item:doesnotexist".to_string(),
            quantity: 1,
            notes: None,
        }];
        assert!(matches!(
            engine.compute_total(&items).await,
            Err(RepoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_non_numeric_price_is_integrity_failure() {
        let (db, engine) = setup().await;
        db.query("CREATE menu_item:corrupt SET name = 'Broken', price = 'free', isAvailable = true")
            .await
            .expect("insert corrupt item")
            .check()
            .expect("corrupt insert ok");

        let items = vec![OrderItemInput {
            menu_item_id: "menu_item:corrupt".to_string(),
            quantity: 1,
            notes: None,
        }];
        assert!(matches!(
            engine.compute_total(&items).await,
            Err(RepoError::Integrity(_))
        ));
    }
}
