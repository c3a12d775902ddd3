use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::employee::{Employee, EmployeeFields};
use crate::store::{EmployeeStore, StoreError, PAGE_SIZE};

/// Postgres-backed store over the `employees` table.
///
/// Expected schema:
/// ```sql
/// CREATE TABLE employees (
///     id   SERIAL PRIMARY KEY,
///     name TEXT    NOT NULL,
///     age  INTEGER NOT NULL,
///     dept TEXT    NOT NULL
/// );
/// ```
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            return StoreError::Integrity(db_err.to_string());
        }
    }
    StoreError::Database(err.to_string())
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list_page(&self, page: i64) -> Result<Vec<Employee>, StoreError> {
        // Saturating so an absurdly large page stays a valid (empty) page
        // instead of overflowing into a negative offset.
        let offset = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, age, dept FROM employees ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(PAGE_SIZE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_age_greater_than(&self, age: i32) -> Result<Vec<Employee>, StoreError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, age, dept FROM employees WHERE age > $1 ORDER BY id ASC",
        )
        .bind(age)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn get(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        sqlx::query_as::<_, Employee>("SELECT id, name, age, dept FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<Employee, StoreError> {
        // Transaction per call: commit on success, rollback (via drop) on
        // any error path.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, age, dept) VALUES ($1, $2, $3) \
             RETURNING id, name, age, dept",
        )
        .bind(&fields.name)
        .bind(fields.age)
        .bind(&fields.dept)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(employee)
    }

    async fn update(&self, id: i32, fields: EmployeeFields) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("UPDATE employees SET name = $1, age = $2, dept = $3 WHERE id = $4")
            .bind(&fields.name)
            .bind(fields.age)
            .bind(&fields.dept)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}
