//! Store access for the request handlers.
//!
//! Handlers only see the object-safe [Store] trait. [postgres::PgStore] is the production
//! implementation over a `PgPool`; tests swap in the in-memory `mock::StoreMock`.

use crate::config::DatabaseConfig;
use crate::models::employee::{Employee, EmployeeId, NewEmployee};
use crate::models::event::{Event, EventId};
use futures_util::future::BoxFuture;
use sqlx::PgPool;
use std::fmt;

#[cfg(test)]
pub mod mock;
pub mod postgres;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPool::connect_with(config.connect_options()?).await
}

#[derive(Debug)]
pub enum StoreError {
    /// The statement matched no row
    NotFound,
    /// Connection, syntax or constraint failure, carrying the driver's message
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "no rows in result set"),
            StoreError::Database(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other.to_string()),
        }
    }
}

/// Optional restriction on the `accommodation` flag of an attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccommodationFilter {
    #[default]
    Any,
    Required,
    NotRequired,
}

impl AccommodationFilter {
    /// Only the literals `"true"` and `"false"` restrict the result; anything else is ignored.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("true") => AccommodationFilter::Required,
            Some("false") => AccommodationFilter::NotRequired,
            _ => AccommodationFilter::Any,
        }
    }

    /// Value the `accommodation` column must equal, if any.
    pub fn accommodation(self) -> Option<bool> {
        match self {
            AccommodationFilter::Any => None,
            AccommodationFilter::Required => Some(true),
            AccommodationFilter::NotRequired => Some(false),
        }
    }
}

pub trait Store: Send + Sync {
    /// All employees ordered by id
    fn list_employees(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>>;

    /// Insert a new employee and return the id generated by the store
    fn insert_employee<'a>(
        &'a self,
        employee: &'a NewEmployee,
    ) -> BoxFuture<'a, Result<EmployeeId, StoreError>>;

    fn find_employee(&self, id: EmployeeId) -> BoxFuture<'_, Result<Employee, StoreError>>;

    /// Write all mutable fields of `employee` to the row with its id and return the row as stored
    fn update_employee<'a>(
        &'a self,
        employee: &'a Employee,
    ) -> BoxFuture<'a, Result<Employee, StoreError>>;

    /// Delete the employee and return its last values
    fn delete_employee(&self, id: EmployeeId) -> BoxFuture<'_, Result<Employee, StoreError>>;

    /// All events ordered by id
    fn list_events(&self) -> BoxFuture<'_, Result<Vec<Event>, StoreError>>;

    fn find_event(&self, id: EventId) -> BoxFuture<'_, Result<Event, StoreError>>;

    /// Employees attending the event, ordered by employee id
    fn list_event_employees(
        &self,
        event_id: EventId,
        filter: AccommodationFilter,
    ) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>>;
}
