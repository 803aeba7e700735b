use crate::model::field::EmployeeField;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One entry of the directory.
///
/// Records are created from an `EmployeeDraft` and handed to the
/// `EmployeeStore` in one piece. Text fields are non-empty when they come out
/// of the editor, but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned by the store, unique within it and never changed.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub salary: f64,
    /// ISO `YYYY-MM-DD`, as produced by a date input.
    pub date_of_joining: String,
    pub location: String,
    pub manager: String,
}

impl Employee {
    /// Text value of a field, or `None` for the numeric salary.
    pub fn text(&self, field: EmployeeField) -> Option<&str> {
        match field {
            EmployeeField::Name => Some(&self.name),
            EmployeeField::Email => Some(&self.email),
            EmployeeField::Phone => Some(&self.phone),
            EmployeeField::Department => Some(&self.department),
            EmployeeField::Designation => Some(&self.designation),
            EmployeeField::Salary => None,
            EmployeeField::DateOfJoining => Some(&self.date_of_joining),
            EmployeeField::Location => Some(&self.location),
            EmployeeField::Manager => Some(&self.manager),
        }
    }

    /// Orders two records by one field: numerically for salary,
    /// lexicographically for everything else.
    pub fn compare_by(&self, other: &Employee, field: EmployeeField) -> Ordering {
        match (self.text(field), other.text(field)) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => self.salary.total_cmp(&other.salary),
        }
    }

    /// Case-insensitive match of an already lowercased term against name,
    /// email and phone.
    pub fn matches_search(&self, lowered_term: &str) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .any(|value| value.to_lowercase().contains(lowered_term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, salary: f64) -> Employee {
        Employee {
            id: 1,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            department: "Engineering".to_string(),
            designation: "Engineer".to_string(),
            salary,
            date_of_joining: "2024-01-15".to_string(),
            location: "Remote".to_string(),
            manager: "Dana".to_string(),
        }
    }

    #[test]
    fn salary_compares_numerically() {
        let low = employee("A", 900.0);
        let high = employee("B", 10_000.0);
        assert_eq!(low.compare_by(&high, EmployeeField::Salary), Ordering::Less);
    }

    #[test]
    fn text_fields_compare_lexicographically() {
        let bob = employee("Bob", 1.0);
        let alice = employee("Alice", 2.0);
        assert_eq!(bob.compare_by(&alice, EmployeeField::Name), Ordering::Greater);
        assert_eq!(bob.compare_by(&alice, EmployeeField::Department), Ordering::Equal);
    }

    #[test]
    fn search_covers_name_email_and_phone() {
        let record = employee("Alice Smith", 1.0);
        assert!(record.matches_search("alice"));
        assert!(record.matches_search("example.com"));
        assert!(record.matches_search("0100"));
        assert!(!record.matches_search("engineering"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(employee("Alice", 1.0)).unwrap();
        assert_eq!(json["dateOfJoining"], "2024-01-15");
    }
}
