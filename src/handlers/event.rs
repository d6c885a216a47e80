use actix_web::{web, HttpResponse};
use crate::db::{AccommodationFilter, Store};
use crate::errors::AppError;
use crate::handlers::log_store_error;
use crate::utils::validation::parse_id;

pub async fn get_events(
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    let events = store
        .list_events()
        .await
        .inspect_err(|err| log_store_error("Listing events", err))?;

    Ok(HttpResponse::Ok().json(events))
}

pub async fn get_event(
    store: web::Data<dyn Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id.into_inner())?;

    let event = store
        .find_event(id)
        .await
        .inspect_err(|err| log_store_error("Fetching event", err))
        .map_err(|err| AppError::from(err).context("Error querying db"))?;

    Ok(HttpResponse::Ok().json(event))
}

/// Employees attending the event, optionally restricted by `?accommodation=true|false`.
///
/// If the parameter is repeated, the first occurrence wins.
pub async fn get_event_employees(
    store: web::Data<dyn Store>,
    id: web::Path<String>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let event_id = parse_id(&id.into_inner())?;
    let accommodation = query
        .iter()
        .find(|(key, _)| key == "accommodation")
        .map(|(_, value)| value.as_str());
    let filter = AccommodationFilter::from_param(accommodation);

    let employees = store
        .list_event_employees(event_id, filter)
        .await
        .inspect_err(|err| log_store_error("Listing event attendees", err))?;

    Ok(HttpResponse::Ok().json(employees))
}
