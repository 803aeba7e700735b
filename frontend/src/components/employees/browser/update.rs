use directory_common::view::SortConfig;
use yew::prelude::*;

use super::messages::Msg;
use super::state::EmployeeBrowser;

/// Applies one control change to the query. Only the touched control moves;
/// in particular the page is not reset by a new search, it is clamped when
/// the view is derived.
pub fn update(component: &mut EmployeeBrowser, _ctx: &Context<EmployeeBrowser>, msg: Msg) -> bool {
    let query = &mut component.query;
    match msg {
        Msg::Search(term) => query.search = term,
        Msg::FilterDepartment(department) => query.department = department,
        Msg::Sort(field) => query.sort = Some(SortConfig::toggled(query.sort, field)),
        Msg::Paginate(page) => query.page = page,
    }
    true
}
