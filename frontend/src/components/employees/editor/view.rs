//! View rendering for the employee form.
//!
//! One labelled input per `EmployeeField`, all marked `required` so the
//! browser blocks an incomplete form before `Msg::Submit` is even sent. The
//! draft is validated again on submit.

use directory_common::model::EmployeeField;
use directory_common::route::Route;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::EmployeeEditor;

pub fn view(component: &EmployeeEditor, ctx: &Context<EmployeeEditor>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let to_list = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::List))
    };

    html! {
        <div class="add-employee-container">
            <div class="toolbar end">
                <button class="btn btn-list" onclick={to_list}>{"List"}</button>
            </div>
            <h2>{ props.heading.clone() }</h2>
            <form
                class="employee-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                { for EmployeeField::ALL.into_iter().map(|field| form_group(component, link, field)) }
                <button type="submit" class="submit-btn">{ props.submit_label.clone() }</button>
            </form>
        </div>
    }
}

/// Inputs report changes by their `name`, which is the field's key.
fn form_group(component: &EmployeeEditor, link: &Scope<EmployeeEditor>, field: EmployeeField) -> Html {
    let oninput = link.batch_callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        EmployeeField::from_key(&input.name()).map(|field| Msg::UpdateField(field, input.value()))
    });
    let step = (field == EmployeeField::Salary).then_some("any");

    html! {
        <div class="form-group">
            <label for={field.key()}>{ field.label() }</label>
            <input
                id={field.key()}
                type={field.input_type()}
                name={field.key()}
                step={step}
                value={component.draft.value(field).to_string()}
                {oninput}
                required={true}
            />
        </div>
    }
}
