use directory_common::model::EmployeeField;

#[derive(Clone)]
pub enum Msg {
    UpdateField(EmployeeField, String),
    Submit,
}
