//! View rendering for the employee table.
//!
//! Layout follows the list page: a control row (search, department select,
//! "New" button), the table with one clickable header per sortable column,
//! and the pager. An empty result renders a single placeholder row across
//! all columns.

use directory_common::model::{Employee, EmployeeField};
use directory_common::route::Route;
use directory_common::view::{derive_view, sort_arrow, EmployeeView, Pagination};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::format_salary;

use super::messages::Msg;
use super::state::EmployeeBrowser;

/// Data columns plus the actions column.
const COLUMN_COUNT: usize = EmployeeField::ALL.len() + 1;

pub fn view(component: &EmployeeBrowser, ctx: &Context<EmployeeBrowser>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let employee_view = derive_view(&props.employees, &component.query, props.page_size);

    html! {
        <div class="employee-list">
            <h2>{"Employee List"}</h2>
            { build_controls(component, ctx, &employee_view) }
            <table class="employee-table">
                <thead>
                    <tr>
                        { for EmployeeField::ALL.into_iter().map(|field| header_cell(component, link, field)) }
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if employee_view.rows.is_empty() {
                            html! {
                                <tr>
                                    <td colspan={COLUMN_COUNT.to_string()} class="empty">
                                        {"No employees found"}
                                    </td>
                                </tr>
                            }
                        } else {
                            employee_view.rows.iter().map(|employee| row(ctx, employee)).collect::<Html>()
                        }
                    }
                </tbody>
            </table>
            { build_pager(link, employee_view.pagination()) }
        </div>
    }
}

fn build_controls(
    component: &EmployeeBrowser,
    ctx: &Context<EmployeeBrowser>,
    employee_view: &EmployeeView,
) -> Html {
    let link = ctx.link();
    let selected = component.query.department.clone();
    let to_add = {
        let on_navigate = ctx.props().on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Add))
    };

    html! {
        <div class="toolbar">
            <input
                type="text"
                class="search"
                placeholder="Search by Name, Email, or Phone"
                value={component.query.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Search(input.value())
                })}
            />
            <select
                class="department-filter"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::FilterDepartment(select.value())
                })}
            >
                <option value="" selected={selected.is_empty()}>{"All Departments"}</option>
                { for employee_view.department_options.iter().map(|department| html! {
                    <option value={department.clone()} selected={*department == selected}>
                        { department.clone() }
                    </option>
                }) }
            </select>
            <button class="btn btn-new" onclick={to_add}>{"New"}</button>
        </div>
    }
}

fn header_cell(component: &EmployeeBrowser, link: &Scope<EmployeeBrowser>, field: EmployeeField) -> Html {
    html! {
        <th class="sortable" onclick={link.callback(move |_| Msg::Sort(field))}>
            { field.label() }{ sort_arrow(component.query.sort, field) }
        </th>
    }
}

fn row(ctx: &Context<EmployeeBrowser>, employee: &Employee) -> Html {
    let props = ctx.props();
    let id = employee.id;
    let on_edit = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Edit(id)))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <tr key={id.to_string()}>
            <td>{ employee.name.clone() }</td>
            <td>{ employee.email.clone() }</td>
            <td>{ employee.phone.clone() }</td>
            <td>{ employee.department.clone() }</td>
            <td>{ employee.designation.clone() }</td>
            <td class="numeric">{ format_salary(employee.salary) }</td>
            <td>{ employee.date_of_joining.clone() }</td>
            <td>{ employee.location.clone() }</td>
            <td>{ employee.manager.clone() }</td>
            <td class="actions">
                <button class="btn btn-edit" onclick={on_edit}>{"Edit"}</button>
                <button class="btn btn-delete" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

/// Previous/Next are disabled at the edges; the numbered buttons are always
/// enabled since there are exactly `total_pages` of them.
fn build_pager(link: &Scope<EmployeeBrowser>, pagination: Pagination) -> Html {
    let current = pagination.current_page;

    html! {
        <div class="pager">
            <button
                disabled={pagination.previous_disabled()}
                onclick={link.callback(move |_| Msg::Paginate(current.saturating_sub(1)))}
            >
                {"Previous"}
            </button>
            { for pagination.pages().map(|(page, active)| html! {
                <button
                    key={page.to_string()}
                    class={classes!("page", active.then_some("active"))}
                    onclick={link.callback(move |_| Msg::Paginate(page))}
                >
                    { page }
                </button>
            }) }
            <button
                disabled={pagination.next_disabled()}
                onclick={link.callback(move |_| Msg::Paginate(current + 1))}
            >
                {"Next"}
            </button>
        </div>
    }
}
