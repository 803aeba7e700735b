//! Browser-side utilities shared by the directory components.
//!
//! - **User Feedback**: short-lived toast notifications for adds, edits,
//!   deletes and rejected submissions.
//! - **Configuration**: reading the optional JSON settings block embedded in
//!   `index.html`.
//! - **Routing**: mirroring the current `Route` in the location fragment so
//!   `#/employees` and `#/edit/{id}` can be linked to directly.
//! - **Formatting**: salary cells with thousands separators.

use directory_common::config::DirectoryConfig;
use directory_common::route::Route;
use gloo_console::warn;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::Callback;

/// Id of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "directory-config";

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is a plain `div` appended to `<body>` and removed again after
/// three seconds. Used by the owner component after every store change and
/// by the editor when a submission is rejected.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Loads `DirectoryConfig` from the page, falling back to defaults when the
/// element is absent or its content does not parse.
pub fn load_config() -> DirectoryConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) => DirectoryConfig::from_json(&raw).unwrap_or_else(|err| {
            warn!(format!("Ignoring directory config: {}", err));
            DirectoryConfig::default()
        }),
        None => DirectoryConfig::default(),
    }
}

/// Route named by the location fragment, the landing view when there is none.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map_or(Route::Add, |hash| Route::parse(&hash))
}

/// Writes `route` into the location fragment unless it is already there.
pub fn set_location_route(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let hash = route.hash();
    if location.hash().ok().as_deref() == Some(hash.as_str()) {
        return;
    }
    if let Err(err) = location.set_hash(&hash) {
        warn!("Could not update location", err);
    }
}

/// Calls `on_change` with the parsed route whenever the fragment changes,
/// e.g. on back/forward. The listener lives as long as the returned closure.
pub fn listen_for_route_changes(on_change: Callback<Route>) -> Option<Closure<dyn Fn()>> {
    let window = web_sys::window()?;
    let listener = Closure::<dyn Fn()>::new(move || on_change.emit(current_route()));
    window.set_onhashchange(Some(listener.as_ref().unchecked_ref()));
    Some(listener)
}

/// Renders a salary with `,` thousands separators, keeping two decimals only
/// when there is a fractional part.
pub fn format_salary(salary: f64) -> String {
    if !salary.is_finite() {
        return salary.to_string();
    }
    let cents = (salary.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    let sign = if salary < 0.0 && cents > 0 { "-" } else { "" };
    match cents % 100 {
        0 => format!("{}{}", sign, whole),
        fraction => format!("{}{}.{:02}", sign, whole, fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_gets_thousands_separators() {
        assert_eq!(format_salary(0.0), "0");
        assert_eq!(format_salary(85000.0), "85,000");
        assert_eq!(format_salary(1234567.5), "1,234,567.50");
        assert_eq!(format_salary(-1200.0), "-1,200");
    }
}
