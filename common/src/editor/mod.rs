//! Draft state behind the employee form.
//!
//! A draft keeps the raw text of every input, the way the form holds it while
//! the user types. It only becomes an `Employee` through `validate`, which is
//! where required fields and the salary number are checked.

use crate::error::ValidationError;
use crate::model::{Employee, EmployeeField};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    id: u64,
    values: HashMap<EmployeeField, String>,
}

impl EmployeeDraft {
    /// Blank draft: empty text everywhere and a salary of `"0"`.
    pub fn new(id: u64) -> Self {
        let mut values: HashMap<EmployeeField, String> = EmployeeField::ALL
            .into_iter()
            .map(|field| (field, String::new()))
            .collect();
        values.insert(EmployeeField::Salary, "0".to_string());
        Self { id, values }
    }

    /// Draft pre-filled from an existing record, used by the edit view.
    pub fn from_employee(employee: &Employee) -> Self {
        let values = EmployeeField::ALL
            .into_iter()
            .map(|field| {
                let value = match employee.text(field) {
                    Some(text) => text.to_string(),
                    None => employee.salary.to_string(),
                };
                (field, value)
            })
            .collect();
        Self {
            id: employee.id,
            values,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn value(&self, field: EmployeeField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Overwrites one field. Nothing is checked here.
    pub fn update_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Checks every field in form order and builds the record.
    ///
    /// The first blank field wins, so the reported error points at the
    /// topmost input the user still has to fill in.
    pub fn validate(&self) -> Result<Employee, ValidationError> {
        if let Some(missing) = EmployeeField::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
        {
            return Err(ValidationError::MissingField(missing));
        }

        let raw_salary = self.value(EmployeeField::Salary).trim();
        let salary = raw_salary
            .parse::<f64>()
            .ok()
            .filter(|salary| salary.is_finite())
            .ok_or_else(|| ValidationError::InvalidSalary(raw_salary.to_string()))?;

        let text = |field: EmployeeField| self.value(field).to_string();
        Ok(Employee {
            id: self.id,
            name: text(EmployeeField::Name),
            email: text(EmployeeField::Email),
            phone: text(EmployeeField::Phone),
            department: text(EmployeeField::Department),
            designation: text(EmployeeField::Designation),
            salary,
            date_of_joining: text(EmployeeField::DateOfJoining),
            location: text(EmployeeField::Location),
            manager: text(EmployeeField::Manager),
        })
    }

    /// Hands the validated record to `on_submit` and then asks `on_navigate`
    /// to leave the form. On failure neither is called and the error is
    /// returned. The draft itself is left untouched either way.
    pub fn submit<S, N>(&self, on_submit: S, on_navigate: N) -> Result<(), ValidationError>
    where
        S: FnOnce(Employee),
        N: FnOnce(),
    {
        let employee = self.validate()?;
        on_submit(employee);
        on_navigate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(id: u64) -> EmployeeDraft {
        let mut draft = EmployeeDraft::new(id);
        draft.update_field(EmployeeField::Name, "Alice Smith");
        draft.update_field(EmployeeField::Email, "alice@example.com");
        draft.update_field(EmployeeField::Phone, "555-0101");
        draft.update_field(EmployeeField::Department, "Engineering");
        draft.update_field(EmployeeField::Designation, "Engineer");
        draft.update_field(EmployeeField::Salary, "85000");
        draft.update_field(EmployeeField::DateOfJoining, "2023-04-01");
        draft.update_field(EmployeeField::Location, "Berlin");
        draft.update_field(EmployeeField::Manager, "Dana");
        draft
    }

    #[test]
    fn new_draft_is_blank_with_zero_salary() {
        let draft = EmployeeDraft::new(7);
        assert_eq!(draft.id(), 7);
        assert_eq!(draft.value(EmployeeField::Salary), "0");
        assert_eq!(draft.value(EmployeeField::Name), "");
    }

    #[test]
    fn update_field_touches_only_that_field() {
        let mut draft = filled(1);
        let before = draft.clone();
        draft.update_field(EmployeeField::Location, "Lisbon");
        for field in EmployeeField::ALL {
            if field == EmployeeField::Location {
                assert_eq!(draft.value(field), "Lisbon");
            } else {
                assert_eq!(draft.value(field), before.value(field));
            }
        }
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut draft = filled(1);
        draft.update_field(EmployeeField::Department, "");
        draft.update_field(EmployeeField::Manager, "   ");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField(EmployeeField::Department))
        );
    }

    #[test]
    fn validate_rejects_non_numeric_salary() {
        let mut draft = filled(1);
        draft.update_field(EmployeeField::Salary, "lots");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidSalary("lots".to_string()))
        );
    }

    #[test]
    fn validate_builds_the_record() {
        let employee = filled(3).validate().unwrap();
        assert_eq!(employee.id, 3);
        assert_eq!(employee.salary, 85000.0);
        assert_eq!(employee.date_of_joining, "2023-04-01");
    }

    #[test]
    fn submit_with_missing_field_calls_nothing() {
        let mut draft = filled(1);
        draft.update_field(EmployeeField::Department, "");
        let mut added = Vec::new();
        let mut navigated = false;
        let result = draft.submit(|e| added.push(e), || navigated = true);
        assert!(result.is_err());
        assert!(added.is_empty());
        assert!(!navigated);
    }

    #[test]
    fn submit_adds_then_navigates_and_keeps_draft() {
        let draft = filled(9);
        let mut added = Vec::new();
        let mut navigated = false;
        draft
            .submit(|e| added.push(e), || navigated = true)
            .unwrap();
        assert_eq!(added.len(), 1);
        assert!(navigated);
        assert_eq!(draft.value(EmployeeField::Name), "Alice Smith");
    }

    #[test]
    fn from_employee_round_trips_through_validate() {
        let employee = filled(5).validate().unwrap();
        let draft = EmployeeDraft::from_employee(&employee);
        assert_eq!(draft.validate().unwrap(), employee);
    }
}
