//! Employee form: root module wiring the Yew `Component` implementation with
//! submodules for state, messages, update logic and view rendering.
//!
//! The editor owns nothing but its draft. A finished record leaves through the
//! `on_submit` callback and the owner decides what to do with it; the editor
//! then asks to navigate back to the list.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EmployeeEditorProps;
pub use state::EmployeeEditor;

impl Component for EmployeeEditor {
    type Message = Msg;
    type Properties = EmployeeEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        EmployeeEditor::new(ctx.props().draft.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().draft.id() != old_props.draft.id() {
            self.draft = ctx.props().draft.clone();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
