//! Derivation of what the employee table shows.
//!
//! The list view is a pure function of the collection and a `ViewQuery`:
//! sort, then filter, then cut out one page. It is recomputed from scratch on
//! every render and never touches the collection it is given.

mod pagination;
mod query;

pub use pagination::{total_pages, Pagination};
pub use query::{sort_arrow, SortConfig, SortDirection, ViewQuery};

use crate::model::Employee;

/// One rendered page of the table plus the inputs its controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeView {
    pub rows: Vec<Employee>,
    pub filtered_count: usize,
    pub total_pages: usize,
    /// Requested page clamped to `1..=total_pages`.
    pub current_page: usize,
    pub department_options: Vec<String>,
}

impl EmployeeView {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, self.total_pages)
    }
}

pub fn derive_view(employees: &[Employee], query: &ViewQuery, page_size: usize) -> EmployeeView {
    let page_size = page_size.max(1);

    let mut sorted: Vec<&Employee> = employees.iter().collect();
    if let Some(sort) = query.sort {
        // stable: equal keys keep collection order
        sorted.sort_by(|a, b| {
            let ordering = a.compare_by(b, sort.field);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    let term = query.search.to_lowercase();
    let filtered: Vec<&Employee> = sorted
        .into_iter()
        .filter(|e| term.is_empty() || e.matches_search(&term))
        .filter(|e| query.department.is_empty() || e.department == query.department)
        .collect();

    let total_pages = total_pages(filtered.len(), page_size);
    let current_page = query.page.clamp(1, total_pages);
    let rows = filtered
        .iter()
        .skip((current_page - 1) * page_size)
        .take(page_size)
        .map(|e| (*e).clone())
        .collect();

    EmployeeView {
        rows,
        filtered_count: filtered.len(),
        total_pages,
        current_page,
        department_options: department_options(employees),
    }
}

/// Distinct departments of the whole collection, in first-seen order.
pub fn department_options(employees: &[Employee]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for employee in employees {
        if !options.contains(&employee.department) {
            options.push(employee.department.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmployeeField;

    fn employee(id: u64, name: &str, department: &str, salary: f64) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: format!("{}@corp.test", name.to_lowercase().replace(' ', ".")),
            phone: format!("555-{:04}", id),
            department: department.to_string(),
            designation: "Staff".to_string(),
            salary,
            date_of_joining: format!("2020-01-{:02}", id),
            location: "HQ".to_string(),
            manager: "Morgan".to_string(),
        }
    }

    fn ids(view: &EmployeeView) -> Vec<u64> {
        view.rows.iter().map(|e| e.id).collect()
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Carol", "Sales", 300.0),
            employee(2, "alice", "Ops", 100.0),
            employee(3, "Bob", "Sales", 300.0),
            employee(4, "Dave", "Ops", 200.0),
        ]
    }

    #[test]
    fn no_query_keeps_collection_order() {
        let view = derive_view(&roster(), &ViewQuery::default(), 10);
        assert_eq!(ids(&view), [1, 2, 3, 4]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let query = ViewQuery {
            sort: Some(SortConfig::ascending(EmployeeField::Salary)),
            ..ViewQuery::default()
        };
        let view = derive_view(&roster(), &query, 10);
        assert_eq!(ids(&view), [2, 4, 1, 3]);
    }

    #[test]
    fn descending_reverses_distinct_keys() {
        let ascending = ViewQuery {
            sort: Some(SortConfig::ascending(EmployeeField::DateOfJoining)),
            ..ViewQuery::default()
        };
        let descending = ViewQuery {
            sort: Some(SortConfig::toggled(ascending.sort, EmployeeField::DateOfJoining)),
            ..ViewQuery::default()
        };
        let mut up = ids(&derive_view(&roster(), &ascending, 10));
        let down = ids(&derive_view(&roster(), &descending, 10));
        up.reverse();
        assert_eq!(up, down);
    }

    #[test]
    fn text_sort_is_lexicographic() {
        let query = ViewQuery {
            sort: Some(SortConfig::ascending(EmployeeField::Name)),
            ..ViewQuery::default()
        };
        // uppercase sorts before lowercase
        assert_eq!(ids(&derive_view(&roster(), &query, 10)), [3, 1, 4, 2]);
    }

    #[test]
    fn search_is_case_insensitive_and_combines_with_department() {
        let query = ViewQuery {
            search: "A".to_string(),
            department: "Sales".to_string(),
            ..ViewQuery::default()
        };
        let view = derive_view(&roster(), &query, 10);
        assert_eq!(ids(&view), [1]);
        assert_eq!(view.filtered_count, 1);
    }

    #[test]
    fn search_matches_phone_digits() {
        let query = ViewQuery {
            search: "0003".to_string(),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&derive_view(&roster(), &query, 10)), [3]);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let query = ViewQuery {
            search: "nobody".to_string(),
            page: 4,
            ..ViewQuery::default()
        };
        let view = derive_view(&roster(), &query, 3);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let query = ViewQuery {
            page: 9,
            ..ViewQuery::default()
        };
        let view = derive_view(&roster(), &query, 3);
        assert_eq!(view.current_page, 2);
        assert_eq!(ids(&view), [4]);

        let zero = ViewQuery {
            page: 0,
            ..ViewQuery::default()
        };
        assert_eq!(derive_view(&roster(), &zero, 3).current_page, 1);
    }

    #[test]
    fn department_options_ignore_filters_and_keep_first_seen_order() {
        let query = ViewQuery {
            department: "Ops".to_string(),
            ..ViewQuery::default()
        };
        let view = derive_view(&roster(), &query, 1);
        assert_eq!(view.department_options, ["Sales", "Ops"]);
    }
}
