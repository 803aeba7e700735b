//! Shared core of the employee directory.
//!
//! Everything the UI needs that is not a DOM concern lives here: the
//! `Employee` model, the owner-held `EmployeeStore`, the editor draft with its
//! validation, the search/filter/sort/paginate pipeline behind the list view,
//! routes and configuration. The Yew frontend only maps events onto these.

pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod route;
pub mod store;
pub mod view;
