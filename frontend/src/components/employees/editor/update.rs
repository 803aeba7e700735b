//! Update function for the employee form.
//!
//! Field edits overwrite one value of the draft. Submission validates the
//! draft; a valid record goes to the owner followed by a navigation request
//! to the list, an invalid one is reported with a toast and goes nowhere.

use directory_common::route::Route;
use gloo_console::warn;
use yew::prelude::*;

use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::EmployeeEditor;

pub fn update(component: &mut EmployeeEditor, ctx: &Context<EmployeeEditor>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            component.draft.update_field(field, value);
            true
        }
        Msg::Submit => {
            let props = ctx.props();
            let on_submit = props.on_submit.clone();
            let on_navigate = props.on_navigate.clone();

            if let Err(err) = component.draft.submit(
                move |employee| on_submit.emit(employee),
                move || on_navigate.emit(Route::List),
            ) {
                warn!(format!("Rejected employee {}: {}", component.draft.id(), err));
                show_toast(&err.to_string());
            }
            false
        }
    }
}
