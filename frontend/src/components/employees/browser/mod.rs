//! Employee table: search box, department filter, sortable headers,
//! paginated rows and per-row edit/delete actions.
//!
//! The browser never holds records of its own. It receives the whole
//! collection on every render, derives the visible page from it through
//! `directory_common::view::derive_view`, and reports deletions upward.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EmployeeBrowserProps;
pub use state::EmployeeBrowser;

impl Component for EmployeeBrowser {
    type Message = Msg;
    type Properties = EmployeeBrowserProps;

    fn create(_ctx: &Context<Self>) -> Self {
        EmployeeBrowser::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
