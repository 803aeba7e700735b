//! The canonical employee collection.
//!
//! `EmployeeStore` is held by the owning component and is the only place
//! records are added, replaced or removed. It also owns identifier
//! assignment: ids come from a monotonic counter rather than the clock, so
//! two drafts opened in the same instant still get distinct ids.

use crate::editor::EmployeeDraft;
use crate::error::StoreError;
use crate::model::Employee;

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    /// Next id to hand out, `None` once `u64::MAX` has been used.
    next_id: Option<u64>,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Store seeded with existing records, each inserted through `add`, so a
    /// seed with a repeated id is rejected as a whole. The id counter ends up
    /// above the largest seeded id.
    pub fn with_employees(employees: Vec<Employee>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for employee in employees {
            store.add(employee)?;
        }
        Ok(store)
    }

    /// Hands out the next identifier. Never repeats within one store.
    pub fn next_id(&mut self) -> Result<u64, StoreError> {
        let id = self.next_id.ok_or(StoreError::IdSpaceExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    pub fn new_draft(&mut self) -> Result<EmployeeDraft, StoreError> {
        Ok(EmployeeDraft::new(self.next_id()?))
    }

    /// Appends a record.
    pub fn add(&mut self, employee: Employee) -> Result<(), StoreError> {
        if self.get(employee.id).is_some() {
            return Err(StoreError::DuplicateId(employee.id));
        }
        if self.next_id.is_some_and(|next| employee.id >= next) {
            self.next_id = employee.id.checked_add(1);
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Replaces the record with the same id, keeping its position.
    pub fn update(&mut self, employee: Employee) -> Result<(), StoreError> {
        let slot = self
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(StoreError::NotFound(employee.id))?;
        *slot = employee;
        Ok(())
    }

    /// Removes the record with `id`, if any.
    pub fn remove_by_id(&mut self, id: u64) -> Option<Employee> {
        let index = self.employees.iter().position(|e| e.id == id)?;
        Some(self.employees.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
