use actix_web::{web, HttpResponse};
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::models::employee::EmployeeFields;
use crate::store::{EmployeeStore, StoreError};

/// Age threshold for the filtered listing.
const FILTER_AGE: i32 = 23;

#[derive(Deserialize)]
pub struct PageQuery {
    // Kept as a raw string so a non-numeric value falls back to page 1
    // instead of failing query extraction.
    page: Option<String>,
}

/// Logs the failure at the handler boundary before it is turned into a
/// response. Every error path goes through here.
fn fail(err: ApiError) -> ApiError {
    error!("{}", err);
    err
}

/// Maps a store failure to the HTTP boundary: constraint violations keep
/// their integrity shape, everything else is wrapped in the per-operation
/// failure message.
fn store_failure(context: &str, err: StoreError) -> ApiError {
    match err {
        StoreError::Integrity(msg) => ApiError::Integrity(msg),
        StoreError::Database(msg) => {
            ApiError::InternalServerError(format!("{}: {}", context, msg))
        }
    }
}

fn require_key<'a>(data: &'a Value, key: &str) -> Result<&'a Value, ApiError> {
    data.get(key).ok_or_else(|| ApiError::MissingKey(key.to_string()))
}

/// Extracts the full set of replaceable fields from an update body. All
/// three keys are required (full replace, no partial update).
fn replace_fields(data: &Value) -> Result<EmployeeFields, ApiError> {
    let name = require_key(data, "name")?;
    let age = require_key(data, "age")?;
    let dept = require_key(data, "dept")?;

    let name = name
        .as_str()
        .ok_or_else(|| ApiError::InvalidValue("name must be a string".to_string()))?;
    let age = age
        .as_i64()
        .and_then(|age| i32::try_from(age).ok())
        .ok_or_else(|| ApiError::InvalidValue("age must be an integer".to_string()))?;
    let dept = dept
        .as_str()
        .ok_or_else(|| ApiError::InvalidValue("dept must be a string".to_string()))?;

    Ok(EmployeeFields {
        name: name.to_string(),
        age,
        dept: dept.to_string(),
    })
}

pub async fn get_all_employees(
    store: web::Data<dyn EmployeeStore>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = query
        .page
        .as_deref()
        .and_then(|page| page.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);

    let employees = store
        .list_page(page)
        .await
        .map_err(|err| fail(store_failure("Failed to retrieve employees", err)))?;

    info!("Retrieved {} employees for page {}", employees.len(), page);
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employees_age_greater_than_23(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, ApiError> {
    let employees = store
        .list_age_greater_than(FILTER_AGE)
        .await
        .map_err(|err| fail(store_failure("Failed to retrieve employees", err)))?;

    info!(
        "Retrieved {} employees with age greater than {}",
        employees.len(),
        FILTER_AGE
    );
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let employee = store
        .get(id)
        .await
        .map_err(|err| fail(store_failure("Failed to retrieve employee", err)))?;

    match employee {
        Some(employee) => {
            info!("Retrieved employee {}", employee.id);
            Ok(HttpResponse::Ok().json(employee))
        }
        None => Err(fail(ApiError::NotFound("Employee not found".to_string()))),
    }
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let data = body.into_inner();

    let (name, age, dept) = match (data.get("name"), data.get("age"), data.get("dept")) {
        (Some(name), Some(age), Some(dept)) => (name, age, dept),
        _ => {
            return Err(fail(ApiError::Validation(
                "Missing required fields: name, age, or dept".to_string(),
            )))
        }
    };

    // Strings, floats and booleans all fall through as_i64 here, so a
    // non-integer age gets the same response as a non-positive one.
    let age = match age.as_i64().and_then(|age| i32::try_from(age).ok()) {
        Some(age) if age > 0 => age,
        _ => {
            return Err(fail(ApiError::Validation(
                "Age should be a positive integer".to_string(),
            )))
        }
    };

    let name = name
        .as_str()
        .ok_or_else(|| fail(ApiError::InvalidValue("name must be a string".to_string())))?;
    let dept = dept
        .as_str()
        .ok_or_else(|| fail(ApiError::InvalidValue("dept must be a string".to_string())))?;

    info!("Employee creation initiated");
    let employee = store
        .insert(EmployeeFields {
            name: name.to_string(),
            age,
            dept: dept.to_string(),
        })
        .await
        .map_err(|err| fail(store_failure("Failed to create employee", err)))?;

    info!("Employee created successfully with id {}", employee.id);
    Ok(HttpResponse::Created().json(json!({ "message": "Employee created successfully" })))
}

pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let existing = store
        .get(id)
        .await
        .map_err(|err| fail(store_failure("Failed to update employee", err)))?;
    if existing.is_none() {
        return Err(fail(ApiError::NotFoundMessage(
            "Employee not found".to_string(),
        )));
    }

    info!("Employee update initiated for id {}", id);
    let fields = replace_fields(&body.into_inner()).map_err(fail)?;

    store
        .update(id, fields)
        .await
        .map_err(|err| fail(store_failure("Failed to update employee", err)))?;

    info!("Employee updated successfully");
    Ok(HttpResponse::Ok().json(json!({ "message": "Employee updated successfully" })))
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let existing = store
        .get(id)
        .await
        .map_err(|err| fail(store_failure("Failed to delete employee", err)))?;
    if existing.is_none() {
        return Err(fail(ApiError::NotFoundMessage(
            "Employee not found".to_string(),
        )));
    }

    info!("Employee deletion initiated for id {}", id);
    store
        .delete(id)
        .await
        .map_err(|err| fail(store_failure("Failed to delete employee", err)))?;

    info!("Employee deleted successfully");
    Ok(HttpResponse::Ok().json(json!({ "message": "Employee deleted successfully" })))
}
