use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use employee_api::db;
use employee_api::handlers;
use employee_api::store::postgres::PgEmployeeStore;
use employee_api::store::EmployeeStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Initialize the database pool
    let pool = db::create_pool().await;
    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool));

    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_address);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(store.clone()))
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
