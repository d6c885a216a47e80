use crate::db::{AccommodationFilter, Store, StoreError};
use crate::models::employee::{Employee, EmployeeId, NewEmployee};
use crate::models::event::{Event, EventId};
use futures_util::future::{BoxFuture, FutureExt};
use sqlx::{PgPool, Postgres, QueryBuilder};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

impl Store for PgStore {
    fn list_employees(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        async move {
            let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
            Ok(employees)
        }
        .boxed()
    }

    fn insert_employee<'a>(
        &'a self,
        employee: &'a NewEmployee,
    ) -> BoxFuture<'a, Result<EmployeeId, StoreError>> {
        async move {
            let id = sqlx::query_scalar::<_, EmployeeId>(
                "INSERT INTO employees (first_name, last_name, birthday, gender) VALUES ($1, $2, $3, $4) RETURNING id",
            )
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.birth_day)
            .bind(&employee.gender)
            .fetch_one(&self.pool)
            .await?;
            Ok(id)
        }
        .boxed()
    }

    fn find_employee(&self, id: EmployeeId) -> BoxFuture<'_, Result<Employee, StoreError>> {
        async move {
            let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
            Ok(employee)
        }
        .boxed()
    }

    fn update_employee<'a>(
        &'a self,
        employee: &'a Employee,
    ) -> BoxFuture<'a, Result<Employee, StoreError>> {
        async move {
            let updated = sqlx::query_as::<_, Employee>(
                "UPDATE employees SET first_name = $1, last_name = $2, birthday = $3, gender = $4 WHERE id = $5 RETURNING *",
            )
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.birth_day)
            .bind(&employee.gender)
            .bind(employee.id)
            .fetch_one(&self.pool)
            .await?;
            Ok(updated)
        }
        .boxed()
    }

    fn delete_employee(&self, id: EmployeeId) -> BoxFuture<'_, Result<Employee, StoreError>> {
        async move {
            let deleted =
                sqlx::query_as::<_, Employee>("DELETE FROM employees WHERE id = $1 RETURNING *")
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?;
            Ok(deleted)
        }
        .boxed()
    }

    fn list_events(&self) -> BoxFuture<'_, Result<Vec<Event>, StoreError>> {
        async move {
            let events = sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
            Ok(events)
        }
        .boxed()
    }

    fn find_event(&self, id: EventId) -> BoxFuture<'_, Result<Event, StoreError>> {
        async move {
            let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
            Ok(event)
        }
        .boxed()
    }

    fn list_event_employees(
        &self,
        event_id: EventId,
        filter: AccommodationFilter,
    ) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        async move {
            let mut query_builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
                "SELECT employees.id, employees.first_name, employees.last_name, employees.birthday, employees.gender \
                 FROM employees JOIN attendances ON attendances.employee_id = employees.id \
                 WHERE attendances.event_id = ",
            );
            query_builder.push_bind(event_id);

            if let Some(accommodation) = filter.accommodation() {
                query_builder.push(" AND attendances.accommodation = ");
                query_builder.push_bind(accommodation);
            }

            query_builder.push(" ORDER BY employees.id");

            let employees = query_builder
                .build_query_as::<Employee>()
                .fetch_all(&self.pool)
                .await?;
            Ok(employees)
        }
        .boxed()
    }
}
