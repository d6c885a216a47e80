use serde::Serialize;

pub type EventId = i32;

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: String,
}
