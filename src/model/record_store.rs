
use parking_lot::RwLock;
use tracing::debug;

use crate::model::employee::{Employee, EmployeeId};

/// Ordered in-memory collection of employee records behind one reader/writer lock.
///
/// Insertion order is kept. Ids are not required to be unique; every lookup
/// acts on the first record carrying the id.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<Employee>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn create(&self, employee: Employee) {
        let mut records = self.records.write();
        debug!("{:<12} - create id={}", "STORE", employee.id);
        records.push(employee);
    }

    pub fn get_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.records
            .read()
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    /// Replaces the first record with a matching id. Does nothing when the id is absent.
    pub fn update(&self, employee: Employee) {
        let mut records = self.records.write();
        if let Some(slot) = records.iter_mut().find(|record| record.id == employee.id) {
            debug!("{:<12} - update id={}", "STORE", employee.id);
            *slot = employee;
        }
    }

    /// Removes the first record with a matching id. Does nothing when the id is absent.
    pub fn delete(&self, id: EmployeeId) {
        let mut records = self.records.write();
        if let Some(index) = records.iter().position(|record| record.id == id) {
            debug!("{:<12} - delete id={id}", "STORE");
            records.remove(index);
        }
    }

    /// Returns a copy of the window `[offset, offset + limit)` clamped to the
    /// current length. An offset at or past the end yields an empty page.
    pub fn list_page(&self, offset: usize, limit: usize) -> Vec<Employee> {
        let records = self.records.read();
        if offset >= records.len() {
            return Vec::new();
        }
        let end = offset.saturating_add(limit).min(records.len());
        records[offset..end].to_vec()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }
}
