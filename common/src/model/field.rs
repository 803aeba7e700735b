use serde::{Deserialize, Serialize};

/// A column of the employee table and an input of the employee form.
///
/// The identifier is not a field: it is assigned by the store and never
/// edited or sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    Name,
    Email,
    Phone,
    Department,
    Designation,
    Salary,
    DateOfJoining,
    Location,
    Manager,
}

impl EmployeeField {
    /// Every field, in form and table column order.
    pub const ALL: [EmployeeField; 9] = [
        EmployeeField::Name,
        EmployeeField::Email,
        EmployeeField::Phone,
        EmployeeField::Department,
        EmployeeField::Designation,
        EmployeeField::Salary,
        EmployeeField::DateOfJoining,
        EmployeeField::Location,
        EmployeeField::Manager,
    ];

    /// Input name used by the form, matching the serialized record key.
    pub fn key(self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::Email => "email",
            EmployeeField::Phone => "phone",
            EmployeeField::Department => "department",
            EmployeeField::Designation => "designation",
            EmployeeField::Salary => "salary",
            EmployeeField::DateOfJoining => "dateOfJoining",
            EmployeeField::Location => "location",
            EmployeeField::Manager => "manager",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::Name => "Name",
            EmployeeField::Email => "Email",
            EmployeeField::Phone => "Phone",
            EmployeeField::Department => "Department",
            EmployeeField::Designation => "Designation",
            EmployeeField::Salary => "Salary",
            EmployeeField::DateOfJoining => "Date of Joining",
            EmployeeField::Location => "Location",
            EmployeeField::Manager => "Manager",
        }
    }

    /// HTML input type for the form control.
    pub fn input_type(self) -> &'static str {
        match self {
            EmployeeField::Email => "email",
            EmployeeField::Salary => "number",
            EmployeeField::DateOfJoining => "date",
            _ => "text",
        }
    }

    pub fn from_key(key: &str) -> Option<EmployeeField> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}
