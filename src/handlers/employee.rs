use actix_web::{web, HttpResponse};
use log::info;
use crate::db::Store;
use crate::errors::AppError;
use crate::handlers::log_store_error;
use crate::models::employee::{EmployeePatch, NewEmployee};
use crate::utils::validation::parse_id;

pub async fn get_employees(
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    let employees = store
        .list_employees()
        .await
        .inspect_err(|err| log_store_error("Listing employees", err))?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    store: web::Data<dyn Store>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    let new_employee = new_employee.into_inner();

    let id = store
        .insert_employee(&new_employee)
        .await
        .inspect_err(|err| log_store_error("Inserting employee", err))
        .map_err(AppError::from_write)?;

    info!("Created employee {}", id);

    Ok(HttpResponse::Created().json(new_employee.into_employee(id)))
}

/// Fetch the stored employee, overlay the fields present in the body and write all of them back.
///
/// The fetch and the write are separate statements, so a concurrent update of the same row
/// between them is overwritten.
pub async fn update_employee(
    store: web::Data<dyn Store>,
    id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id.into_inner())?;

    let mut employee = store
        .find_employee(id)
        .await
        .inspect_err(|err| log_store_error("Fetching employee for update", err))
        .map_err(|err| AppError::from(err).context("Error querying db"))?;

    let patch: EmployeePatch = serde_json::from_slice(&body)
        .map_err(|err| AppError::BadRequest(format!("binding error: {}", err)))?;
    patch.apply_to(&mut employee);

    let updated = store
        .update_employee(&employee)
        .await
        .inspect_err(|err| log_store_error("Updating employee", err))
        .map_err(|err| AppError::from_write(err).context("Error updating employee"))?;

    info!("Updated employee {}", updated.id);

    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    store: web::Data<dyn Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id.into_inner())?;

    let deleted = store
        .delete_employee(id)
        .await
        .inspect_err(|err| log_store_error("Deleting employee", err))
        .map_err(|err| AppError::from(err).context("Error deleting employee"))?;

    info!("Deleted employee {}", deleted.id);

    Ok(HttpResponse::Ok().json(deleted))
}
