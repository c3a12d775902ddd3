pub mod employee;

use actix_web::web;

/// Wires the employee routes. The literal `/employees/getall` and
/// `/employees/age_greater_than_23` paths are registered before
/// `/employees/{id}` so they are matched first.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees/getall")
            .route(web::get().to(employee::get_all_employees)),
    )
    .service(
        web::resource("/employees/age_greater_than_23")
            .route(web::get().to(employee::get_employees_age_greater_than_23)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::get().to(employee::get_employee)),
    )
    .service(
        web::resource("/create_employee")
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/employee/{id}")
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    );
}
