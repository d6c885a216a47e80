use serde::{Deserialize, Serialize};

pub type EmployeeId = i32;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(rename = "birthday")]
    #[serde(alias = "birthday")]
    pub birth_day: String,
    pub gender: String,
}

/// Body of a create request. Any `id` sent by the client is ignored and omitted fields are
/// stored as empty strings.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    #[serde(alias = "birthday")]
    pub birth_day: String,
    pub gender: String,
}

impl NewEmployee {
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_day: self.birth_day,
            gender: self.gender,
        }
    }
}

/// Body of an update request. Omitted (or null) fields keep their stored value.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(alias = "birthday")]
    pub birth_day: Option<String>,
    pub gender: Option<String>,
}

impl EmployeePatch {
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(birth_day) = self.birth_day {
            employee.birth_day = birth_day;
        }
        if let Some(gender) = self.gender {
            employee.gender = gender;
        }
    }
}
