//! Database Models
//!
//! Entity structs stored in the embedded SurrealDB instance, plus the
//! request/response DTOs for the order API. External JSON uses camelCase
//! field names; record links are serialized as `table:key` strings.

pub mod dining_table;
pub mod employee;
pub mod menu_item;
pub mod order;
pub mod serde_helpers;

pub use dining_table::{DiningTable, TableStatus};
pub use employee::{Employee, EmployeeRole};
pub use menu_item::{AvailableMenuItem, MenuItem};
pub use order::{
    EmployeeSnapshot, EnrichedOrder, EnrichedOrderItem, MenuItemSnapshot, Order, OrderCreate,
    OrderItem, OrderItemInput, OrderStatus, OrderUpdate, TableSnapshot,
};
