pub mod employee;
pub mod event;

use crate::db::StoreError;
use crate::errors::AppError;
use actix_web::web;
use log::{debug, error};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::resource("/employees")
                .route(web::get().to(employee::get_employees))
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/employees/{id}")
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee)),
        )
        .service(
            web::resource("/events")
                .route(web::get().to(event::get_events)),
        )
        .service(
            web::resource("/events/{id}")
                .route(web::get().to(event::get_event)),
        )
        .service(
            web::resource("/events/{id}/employees")
                .route(web::get().to(event::get_event_employees)),
        );
}

/// Body decoding errors become JSON 400 responses. The content type is not enforced.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::BadRequest(format!("binding error: {}", err)).into())
}

/// Undecodable query strings become JSON 400 responses.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(format!("binding error: {}", err)).into())
}

fn log_store_error(action: &str, err: &StoreError) {
    match err {
        StoreError::NotFound => debug!("{}: no matching row", action),
        StoreError::Database(msg) => error!("{}: {}", action, msg),
    }
}
