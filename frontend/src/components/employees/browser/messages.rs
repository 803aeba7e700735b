use directory_common::model::EmployeeField;

#[derive(Clone)]
pub enum Msg {
    Search(String),
    FilterDepartment(String),
    Sort(EmployeeField),
    Paginate(usize),
}
