use directory_common::view::ViewQuery;

/// Search, filter, sort and page selection of the table. Everything shown
/// is derived from this plus the collection passed in as props.
pub struct EmployeeBrowser {
    pub query: ViewQuery,
}

impl EmployeeBrowser {
    pub fn new() -> Self {
        Self {
            query: ViewQuery::default(),
        }
    }
}
