use sqlx::PgPool;
use std::env;

/// Builds the connection pool for the employee service. `DATABASE_URL`
/// must point at a database carrying the `employees` table.
pub async fn create_pool() -> PgPool {
    let database_url =
        env::var("DATABASE_URL").expect("DATABASE_URL must be set for the employee API");
    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to the employees database")
}
