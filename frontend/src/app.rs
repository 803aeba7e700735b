//! Owner of the canonical employee collection.
//!
//! `App` holds the `EmployeeStore` and the current `Route`. The editor and
//! the browser below it never touch the store: they emit add, update, delete
//! and navigate intents through callbacks and `App` applies them here.
//!
//! The current route is mirrored in the location fragment: the first view
//! comes from it, navigation writes it, and back/forward read it again.

use directory_common::editor::EmployeeDraft;
use directory_common::model::Employee;
use directory_common::route::Route;
use directory_common::store::EmployeeStore;
use gloo_console::{log, warn};
use wasm_bindgen::closure::Closure;
use yew::{html, Component, Context, Html};

use crate::components::employees::browser::EmployeeBrowser;
use crate::components::employees::editor::EmployeeEditor;
use crate::helpers::{
    current_route, listen_for_route_changes, load_config, set_location_route, show_toast,
};

pub enum Msg {
    Add(Employee),
    Update(Employee),
    Delete(u64),
    Navigate(Route),
    /// The location fragment changed outside the app (back/forward, typed URL).
    LocationChanged(Route),
}

pub struct App {
    store: EmployeeStore,
    route: Route,
    page_size: usize,
    /// Blank draft handed to the add form; replaced each time the form is
    /// opened. `None` once the store has no ids left to give.
    add_draft: Option<EmployeeDraft>,
    _route_listener: Option<Closure<dyn Fn()>>,
}

impl App {
    fn show(&mut self, route: Route) {
        if route == Route::Add {
            self.add_draft = match self.store.new_draft() {
                Ok(draft) => Some(draft),
                Err(err) => {
                    warn!(format!("Cannot open the add form: {}", err));
                    None
                }
            };
        }
        self.route = route;
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = load_config();
        let store = EmployeeStore::with_employees(config.seed).unwrap_or_else(|err| {
            warn!(format!("Ignoring seed records: {}", err));
            show_toast(&format!("Seed records ignored: {}", err));
            EmployeeStore::new()
        });
        log!(format!(
            "Employee directory ready: {} record(s), {} per page",
            store.len(),
            config.page_size
        ));

        let mut app = Self {
            store,
            route: Route::Add,
            page_size: config.page_size,
            add_draft: None,
            _route_listener: listen_for_route_changes(ctx.link().callback(Msg::LocationChanged)),
        };
        app.show(current_route());
        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Add(employee) => {
                let name = employee.name.clone();
                match self.store.add(employee) {
                    Ok(()) => {
                        log!(format!("Added employee {}", name));
                        show_toast(&format!("{} added.", name));
                    }
                    Err(err) => {
                        warn!(format!("Add failed: {}", err));
                        show_toast(&err.to_string());
                    }
                }
                true
            }
            Msg::Update(employee) => {
                let id = employee.id;
                match self.store.update(employee) {
                    Ok(()) => {
                        log!(format!("Updated employee {}", id));
                        show_toast("Employee updated.");
                    }
                    Err(err) => {
                        warn!(format!("Update failed: {}", err));
                        show_toast(&err.to_string());
                    }
                }
                true
            }
            Msg::Delete(id) => match self.store.remove_by_id(id) {
                Some(removed) => {
                    log!(format!("Deleted employee {}", id));
                    show_toast(&format!("{} deleted.", removed.name));
                    true
                }
                None => {
                    warn!(format!("Delete ignored, no employee {}", id));
                    false
                }
            },
            Msg::Navigate(route) => {
                log!(format!("Navigate to {}", route));
                set_location_route(route);
                self.show(route);
                true
            }
            Msg::LocationChanged(route) => {
                if route == self.route {
                    return false;
                }
                log!(format!("Location changed to {}", route));
                self.show(route);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = link.callback(Msg::Navigate);

        let page = match self.route {
            Route::Add => match &self.add_draft {
                Some(draft) => html! {
                    <EmployeeEditor
                        key={format!("add-{}", draft.id())}
                        draft={draft.clone()}
                        heading="Add Employee"
                        submit_label="Add Employee"
                        on_submit={link.callback(Msg::Add)}
                        {on_navigate}
                    />
                },
                None => html! {
                    <div class="not-found">
                        <h2>{"Cannot add employees"}</h2>
                        <p>{"Every employee id has been used."}</p>
                        <button class="btn btn-list" onclick={link.callback(|_| Msg::Navigate(Route::List))}>
                            {"Back to list"}
                        </button>
                    </div>
                },
            },
            Route::Edit(id) => match self.store.get(id) {
                Some(employee) => html! {
                    <EmployeeEditor
                        key={format!("edit-{}", id)}
                        draft={EmployeeDraft::from_employee(employee)}
                        heading="Edit Employee"
                        submit_label="Save Changes"
                        on_submit={link.callback(Msg::Update)}
                        {on_navigate}
                    />
                },
                None => html! {
                    <div class="not-found">
                        <h2>{"Employee not found"}</h2>
                        <p>{ format!("No employee with id {} exists.", id) }</p>
                        <button class="btn btn-list" onclick={link.callback(|_| Msg::Navigate(Route::List))}>
                            {"Back to list"}
                        </button>
                    </div>
                },
            },
            Route::List => html! {
                <EmployeeBrowser
                    employees={self.store.list().to_vec()}
                    page_size={self.page_size}
                    on_delete={link.callback(Msg::Delete)}
                    {on_navigate}
                />
            },
        };

        html! {
            <div class="app">
                { page }
            </div>
        }
    }
}
