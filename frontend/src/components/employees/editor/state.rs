use directory_common::editor::EmployeeDraft;

/// State of the `EmployeeEditor`: the draft being typed into.
///
/// The draft is never reset after a submission, since the editor is about
/// to be replaced by the list view.
pub struct EmployeeEditor {
    pub draft: EmployeeDraft,
}

impl EmployeeEditor {
    pub fn new(draft: EmployeeDraft) -> Self {
        Self { draft }
    }
}
