use crate::db::{AccommodationFilter, Store, StoreError};
use crate::models::employee::{Employee, EmployeeId, NewEmployee};
use crate::models::event::{Event, EventId};
use futures_util::future::{self, BoxFuture, FutureExt};
use std::sync::{Mutex, MutexGuard};

/**
 * A mock [Store] implementation for testing.
 *
 * The simulated database consists of the [StoreMockData] structure with vectors of rows, which
 * the tests may modify directly. Setting [StoreMockData::next_error] makes the next store call
 * fail with that error instead of touching the data.
 */
#[derive(Default)]
pub struct StoreMock {
    pub data: Mutex<StoreMockData>,
}

#[derive(Default)]
pub struct StoreMockData {
    pub employees: Vec<Employee>,
    pub events: Vec<Event>,
    pub attendances: Vec<Attendance>,
    /// Id handed out by the next insert. Zero means "one past the highest existing id".
    pub next_employee_id: EmployeeId,
    pub next_error: Option<StoreError>,
}

#[derive(Debug, Clone)]
pub struct Attendance {
    pub employee_id: EmployeeId,
    pub event_id: EventId,
    pub accommodation: bool,
}

impl StoreMock {
    fn lock(&self) -> MutexGuard<'_, StoreMockData> {
        self.data.lock().expect("Error while locking mutex.")
    }

    fn run<T: Send + 'static>(
        &self,
        op: impl FnOnce(&mut StoreMockData) -> Result<T, StoreError>,
    ) -> BoxFuture<'static, Result<T, StoreError>> {
        let mut data = self.lock();
        let result = match data.next_error.take() {
            Some(err) => Err(err),
            None => op(&mut *data),
        };
        future::ready(result).boxed()
    }
}

fn sorted_by_id<T: Clone>(rows: &[T], id: impl Fn(&T) -> i32) -> Vec<T> {
    let mut rows = rows.to_vec();
    rows.sort_by_key(|row| id(row));
    rows
}

impl Store for StoreMock {
    fn list_employees(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        self.run(|data| Ok(sorted_by_id(&data.employees, |e| e.id)))
    }

    fn insert_employee<'a>(
        &'a self,
        employee: &'a NewEmployee,
    ) -> BoxFuture<'a, Result<EmployeeId, StoreError>> {
        let employee = employee.clone();
        self.run(move |data| {
            let id = if data.next_employee_id > 0 {
                data.next_employee_id
            } else {
                data.employees.iter().map(|e| e.id).max().unwrap_or(0) + 1
            };
            data.next_employee_id = id + 1;
            data.employees.push(employee.into_employee(id));
            Ok(id)
        })
    }

    fn find_employee(&self, id: EmployeeId) -> BoxFuture<'_, Result<Employee, StoreError>> {
        self.run(move |data| {
            data.employees
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or(StoreError::NotFound)
        })
    }

    fn update_employee<'a>(
        &'a self,
        employee: &'a Employee,
    ) -> BoxFuture<'a, Result<Employee, StoreError>> {
        let employee = employee.clone();
        self.run(move |data| {
            let row = data
                .employees
                .iter_mut()
                .find(|e| e.id == employee.id)
                .ok_or(StoreError::NotFound)?;
            *row = employee;
            Ok(row.clone())
        })
    }

    fn delete_employee(&self, id: EmployeeId) -> BoxFuture<'_, Result<Employee, StoreError>> {
        self.run(move |data| {
            let index = data
                .employees
                .iter()
                .position(|e| e.id == id)
                .ok_or(StoreError::NotFound)?;
            Ok(data.employees.remove(index))
        })
    }

    fn list_events(&self) -> BoxFuture<'_, Result<Vec<Event>, StoreError>> {
        self.run(|data| Ok(sorted_by_id(&data.events, |e| e.id)))
    }

    fn find_event(&self, id: EventId) -> BoxFuture<'_, Result<Event, StoreError>> {
        self.run(move |data| {
            data.events
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or(StoreError::NotFound)
        })
    }

    fn list_event_employees(
        &self,
        event_id: EventId,
        filter: AccommodationFilter,
    ) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        self.run(move |data| {
            let attending: Vec<Employee> = data
                .employees
                .iter()
                .filter(|employee| {
                    data.attendances.iter().any(|a| {
                        a.employee_id == employee.id
                            && a.event_id == event_id
                            && filter.accommodation().map_or(true, |wanted| a.accommodation == wanted)
                    })
                })
                .cloned()
                .collect();
            Ok(sorted_by_id(&attending, |e| e.id))
        })
    }
}

/// Two employees and two events; employees 1 and 2 attend event 1, only 1 with accommodation.
pub fn fill_sample_data(store: &StoreMock) {
    let mut data = store.lock();
    data.employees = vec![
        Employee {
            id: 1,
            first_name: "Son".to_string(),
            last_name: "Nong".to_string(),
            birth_day: "1999-05-19".to_string(),
            gender: "m".to_string(),
        },
        Employee {
            id: 2,
            first_name: "Max".to_string(),
            last_name: "Mustermann".to_string(),
            birth_day: "1998-04-18".to_string(),
            gender: "m".to_string(),
        },
    ];
    data.events = vec![
        Event {
            id: 1,
            name: "Company Offsite".to_string(),
            date: "2023-06-01".to_string(),
        },
        Event {
            id: 2,
            name: "Winter Party".to_string(),
            date: "2023-12-15".to_string(),
        },
    ];
    data.attendances = vec![
        Attendance {
            employee_id: 1,
            event_id: 1,
            accommodation: true,
        },
        Attendance {
            employee_id: 2,
            event_id: 1,
            accommodation: false,
        },
    ];
}
