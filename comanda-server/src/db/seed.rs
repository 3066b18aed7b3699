//! Development Seed Data
//!
//! Populates an empty development database with a small sample catalog so
//! the order workflow can be exercised immediately: two menu items, two
//! employees, two tables.

use crate::db::models::{DiningTable, Employee, EmployeeRole, MenuItem, TableStatus};
use crate::db::repository::{
    DiningTableRepository, EmployeeRepository, MenuItemRepository, RepoResult,
};
use chrono::Utc;
use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Seed sample data if the catalog is empty
pub async fn seed_if_empty(db: &Surreal<Db>) -> RepoResult<()> {
    let existing: Vec<surrealdb::RecordId> = db
        .query("SELECT VALUE id FROM menu_item LIMIT 1")
        .await?
        .take(0)?;
    if !existing.is_empty() {
        return Ok(());
    }

    let menu_items = MenuItemRepository::new(db.clone());
    menu_items
        .create(MenuItem {
            id: None,
            name: "Hamburguesa Clásica".to_string(),
            price: Decimal::new(1299, 2),
            description: "Hamburguesa de carne con lechuga, tomate y queso".to_string(),
            category: "Platos Principales".to_string(),
            is_available: true,
        })
        .await?;
    menu_items
        .create(MenuItem {
            id: None,
            name: "Pizza Margherita".to_string(),
            price: Decimal::new(1599, 2),
            description: "Pizza con salsa de tomate, mozzarella y albahaca".to_string(),
            category: "Platos Principales".to_string(),
            is_available: true,
        })
        .await?;

    let employees = EmployeeRepository::new(db.clone());
    employees
        .create(Employee {
            id: None,
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            role: EmployeeRole::Waiter,
            email: "juan@restaurant.com".to_string(),
            phone_number: "123-456-7890".to_string(),
            hire_date: Utc::now(),
            is_active: true,
        })
        .await?;
    employees
        .create(Employee {
            id: None,
            first_name: "María".to_string(),
            last_name: "García".to_string(),
            role: EmployeeRole::Cook,
            email: "maria@restaurant.com".to_string(),
            phone_number: "123-456-7891".to_string(),
            hire_date: Utc::now(),
            is_active: true,
        })
        .await?;

    let tables = DiningTableRepository::new(db.clone());
    tables
        .create(DiningTable {
            id: None,
            table_number: 1,
            capacity: 4,
            status: TableStatus::Available,
            location: "Interior".to_string(),
        })
        .await?;
    tables
        .create(DiningTable {
            id: None,
            table_number: 2,
            capacity: 2,
            status: TableStatus::Available,
            location: "Terraza".to_string(),
        })
        .await?;

    tracing::info!("Seeded development catalog (2 menu items, 2 employees, 2 tables)");
    Ok(())
}
