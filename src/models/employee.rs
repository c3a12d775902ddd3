use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub dept: String,
}

/// Employee fields without the store-assigned id. Used for inserts and
/// for full-replace updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub age: i32,
    pub dept: String,
}
