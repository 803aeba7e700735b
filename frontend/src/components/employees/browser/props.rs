use directory_common::model::Employee;
use directory_common::route::Route;
use yew::prelude::*;

/// Properties for the `EmployeeBrowser`.
#[derive(Properties, PartialEq, Clone)]
pub struct EmployeeBrowserProps {
    /// The full collection, in the owner's order. Replaced wholesale on
    /// every render of the owner.
    pub employees: Vec<Employee>,

    pub page_size: usize,

    /// Called with the record id as soon as its Delete button is clicked.
    pub on_delete: Callback<u64>,

    pub on_navigate: Callback<Route>,
}
