
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Error, ModelManager, Result};

pub type EmployeeId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "ID")]
    pub id: EmployeeId,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Position")]
    pub position: String,
    /// Non-negative by convention only.
    #[serde(alias = "Salary")]
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            salary,
        }
    }
}

pub struct EmployeeBmc;

impl EmployeeBmc {
    pub fn create(mm: &ModelManager, employee_c: Employee) {
        mm.store().create(employee_c);
    }

    pub fn get(mm: &ModelManager, id: EmployeeId) -> Result<Employee> {
        mm.store()
            .get_by_id(id)
            .ok_or(Error::EntityNotFound { entity: "employee", id })
    }

    /// Absent ids are ignored, matching `delete`.
    pub fn update(mm: &ModelManager, employee_u: Employee) {
        mm.store().update(employee_u);
    }

    pub fn delete(mm: &ModelManager, id: EmployeeId) {
        mm.store().delete(id);
    }

    pub fn list(mm: &ModelManager, offset: usize, limit: usize) -> Vec<Employee> {
        mm.store().list_page(offset, limit)
    }

    pub fn count(mm: &ModelManager) -> usize {
        mm.store().len()
    }

    /// Appends `count` placeholder employees with ids `1..=count`.
    pub fn insert_dummies(mm: &ModelManager, count: u32) {
        debug!("{:<12} - insert_dummies count={count}", "MODEL");
        for i in 1..=count {
            mm.store().create(Employee::new(
                i64::from(i),
                format!("Employee{i}"),
                "Developer",
                50_000.0,
            ));
        }
    }
}
