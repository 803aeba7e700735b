use crate::model::EmployeeField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: EmployeeField,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(field: EmployeeField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Sort state after a click on `field`'s header: the active column flips
    /// direction, any other column becomes active ascending.
    pub fn toggled(current: Option<SortConfig>, field: EmployeeField) -> SortConfig {
        match current {
            Some(active) if active.field == field => SortConfig {
                field,
                direction: active.direction.flipped(),
            },
            _ => SortConfig::ascending(field),
        }
    }
}

/// Header marker for `field`: an arrow on the active column only.
pub fn sort_arrow(sort: Option<SortConfig>, field: EmployeeField) -> &'static str {
    match sort {
        Some(active) if active.field == field => match active.direction {
            SortDirection::Ascending => " ↑",
            SortDirection::Descending => " ↓",
        },
        _ => "",
    }
}

/// User-controlled inputs of the list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Free text matched against name, email and phone. Empty matches all.
    pub search: String,
    /// Exact department to keep. Empty matches all.
    pub department: String,
    pub sort: Option<SortConfig>,
    /// 1-based requested page; clamped when the view is derived.
    pub page: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: String::new(),
            sort: None,
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_the_same_header_alternates_direction() {
        let first = SortConfig::toggled(None, EmployeeField::Name);
        assert_eq!(first.direction, SortDirection::Ascending);
        let second = SortConfig::toggled(Some(first), EmployeeField::Name);
        assert_eq!(second.direction, SortDirection::Descending);
        let third = SortConfig::toggled(Some(second), EmployeeField::Name);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn clicking_another_header_starts_ascending() {
        let active = SortConfig {
            field: EmployeeField::Name,
            direction: SortDirection::Descending,
        };
        let next = SortConfig::toggled(Some(active), EmployeeField::Salary);
        assert_eq!(next, SortConfig::ascending(EmployeeField::Salary));
    }

    #[test]
    fn arrow_only_on_active_column() {
        let sort = Some(SortConfig {
            field: EmployeeField::Email,
            direction: SortDirection::Descending,
        });
        assert_eq!(sort_arrow(sort, EmployeeField::Email), " ↓");
        assert_eq!(sort_arrow(sort, EmployeeField::Name), "");
        assert_eq!(sort_arrow(None, EmployeeField::Email), "");
        assert_eq!(
            sort_arrow(Some(SortConfig::ascending(EmployeeField::Name)), EmployeeField::Name),
            " ↑"
        );
    }
}
