//! Order Creation Validator
//!
//! Sequentially checks a raw creation payload and reports the first failing
//! condition as a client error. Every failure here is a 400; a reference
//! that does not parse is treated the same as one that does not resolve.

use crate::db::models::{OrderCreate, OrderStatus};
use crate::db::repository::{
    DiningTableRepository, EmployeeRepository, MenuItemRepository, dining_table, employee,
    menu_item, parse_ref,
};
use crate::utils::{AppError, AppResult};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Cross-referential validation of an order creation payload
#[derive(Clone)]
pub struct OrderValidator {
    tables: DiningTableRepository,
    employees: EmployeeRepository,
    menu_items: MenuItemRepository,
}

impl OrderValidator {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            tables: DiningTableRepository::new(db.clone()),
            employees: EmployeeRepository::new(db.clone()),
            menu_items: MenuItemRepository::new(db),
        }
    }

    /// Validate a creation payload, returning the first failure
    pub async fn validate_create(&self, payload: &OrderCreate) -> AppResult<()> {
        if payload.items.is_empty() {
            return Err(AppError::validation(
                "The \"items\" array is required and cannot be empty.",
            ));
        }

        if payload.table_id.is_empty() {
            return Err(AppError::validation("\"tableId\" is required."));
        }
        if !self.table_resolves(&payload.table_id).await? {
            return Err(AppError::validation(format!(
                "Table '{}' does not exist.",
                payload.table_id
            )));
        }

        if payload.employee_id.is_empty() {
            return Err(AppError::validation("\"employeeId\" is required."));
        }
        if !self.employee_resolves(&payload.employee_id).await? {
            return Err(AppError::validation(format!(
                "Employee '{}' does not exist.",
                payload.employee_id
            )));
        }

        for item in &payload.items {
            if item.menu_item_id.is_empty() {
                return Err(AppError::validation(
                    "Each item requires a \"menuItemId\".",
                ));
            }
            if item.quantity <= 0 {
                return Err(AppError::validation(
                    "Item quantity must be a positive number.",
                ));
            }
            if !self.menu_item_resolves(&item.menu_item_id).await? {
                return Err(AppError::validation(format!(
                    "Menu item '{}' does not exist.",
                    item.menu_item_id
                )));
            }
        }

        if let Some(status) = payload.status.as_deref()
            && OrderStatus::parse(status).is_none()
        {
            return Err(AppError::validation(format!(
                "\"status\" must be one of: {}",
                OrderStatus::ALL.join(", ")
            )));
        }

        Ok(())
    }

    async fn table_resolves(&self, raw: &str) -> AppResult<bool> {
        match parse_ref(dining_table::TABLE, raw) {
            Ok(id) => Ok(self.tables.exists(&id).await?),
            Err(_) => Ok(false),
        }
    }

    async fn employee_resolves(&self, raw: &str) -> AppResult<bool> {
        match parse_ref(employee::TABLE, raw) {
            Ok(id) => Ok(self.employees.exists(&id).await?),
            Err(_) => Ok(false),
        }
    }

    async fn menu_item_resolves(&self, raw: &str) -> AppResult<bool> {
        match parse_ref(menu_item::TABLE, raw) {
            Ok(id) => Ok(self.menu_items.exists(&id).await?),
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::{
        DiningTable, Employee, EmployeeRole, MenuItem, OrderItemInput, TableStatus,
    };
    use chrono::Utc;
    use rust_decimal::Decimal;

    struct Fixture {
        validator: OrderValidator,
        table_id: String,
        employee_id: String,
        menu_item_id: String,
    }

    async fn setup() -> Fixture {
        let db = DbService::memory().await.expect("in-memory db").db;

        let table = DiningTableRepository::new(db.clone())
            .create(DiningTable {
                id: None,
                table_number: 99,
                capacity: 2,
                status: TableStatus::Available,
                location: "test-area".to_string(),
            })
            .await
            .expect("create table");

        let employee = EmployeeRepository::new(db.clone())
            .create(Employee {
                id: None,
                first_name: "Test".to_string(),
                last_name: "Employee".to_string(),
                role: EmployeeRole::Waiter,
                email: "test.emp@test.com".to_string(),
                phone_number: "123".to_string(),
                hire_date: Utc::now(),
                is_active: true,
            })
            .await
            .expect("create employee");

        let menu_item = MenuItemRepository::new(db.clone())
            .create(MenuItem {
                id: None,
                name: "Test Dish".to_string(),
                price: Decimal::new(999, 2),
                description: "A dish for testing".to_string(),
                category: "Test".to_string(),
                is_available: true,
            })
            .await
            .expect("create menu item");

        Fixture {
            validator: OrderValidator::new(db),
            table_id: table.id.expect("table id").to_string(),
            employee_id: employee.id.expect("employee id").to_string(),
            menu_item_id: menu_item.id.expect("menu item id").to_string(),
        }
    }

    fn valid_payload(fx: &Fixture) -> OrderCreate {
        OrderCreate {
            items: vec![OrderItemInput {
                menu_item_id: fx.menu_item_id.clone(),
                quantity: 1,
                notes: Some("extra spicy".to_string()),
            }],
            table_id: fx.table_id.clone(),
            employee_id: fx.employee_id.clone(),
            special_instructions: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let fx = setup().await;
        fx.validator
            .validate_create(&valid_payload(&fx))
            .await
            .expect("payload should validate");
    }

    #[tokio::test]
    async fn test_empty_items_rejected_first() {
        let fx = setup().await;
        let mut payload = valid_payload(&fx);
        payload.items.clear();
        payload.table_id.clear(); // items failure must win over tableId

        let err = fx.validator.validate_create(&payload).await.unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("items")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dangling_table_reference_rejected() {
        let fx = setup().await;
        let mut payload = valid_payload(&fx);
        payload.table_id = "dining_table:missing".to_string();

        let err = fx.validator.validate_create(&payload).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_malformed_reference_is_client_error() {
        let fx = setup().await;
        let mut payload = valid_payload(&fx);
        payload.employee_id = "not a record id".to_string();

        // Bare keys are scoped to the employee table, so this is simply a
        // reference that does not resolve - still a 400.
        let err = fx.validator.validate_create(&payload).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_non_positive_quantity_rejected() {
        let fx = setup().await;
        let mut payload = valid_payload(&fx);
        payload.items[0].quantity = 0;

        let err = fx.validator.validate_create(&payload).await.unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("quantity")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_status_rejected() {
        let fx = setup().await;
        let mut payload = valid_payload(&fx);
        payload.status = Some("pending".to_string());

        let err = fx.validator.validate_create(&payload).await.unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("status")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
