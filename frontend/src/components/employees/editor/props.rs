//! Properties for the `EmployeeEditor`.
//!
//! The same component serves the add view and the edit view; only the
//! starting draft and the labels differ.

use directory_common::editor::EmployeeDraft;
use directory_common::model::Employee;
use directory_common::route::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmployeeEditorProps {
    /// Starting state of the form. A blank draft from the store for the add
    /// view, or one built from the existing record for the edit view.
    ///
    /// Only read on creation and when its id changes, so the user's typing is
    /// not overwritten by unrelated re-renders of the owner.
    pub draft: EmployeeDraft,

    pub heading: AttrValue,

    pub submit_label: AttrValue,

    /// Receives the validated record. Not called when validation fails.
    pub on_submit: Callback<Employee>,

    pub on_navigate: Callback<Route>,
}
