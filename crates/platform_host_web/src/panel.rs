//! Link panel: one affordance per launch target, wired to the dispatcher.

use platform_host::{
    Action, Affordance, Dispatch, DispatchError, Dispatcher, LaunchTargets, LaunchTargetsError,
};

/// Heading rendered above the panel's controls.
pub const PANEL_TITLE: &str = "Tauri Link and Files";

/// One rendered control and the action behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    /// Action dispatched or linked by the control.
    pub action: Action,
    /// Control chosen for the dispatcher's environment.
    pub affordance: Affordance,
}

/// Affordances for a set of [`LaunchTargets`] under one [`Dispatcher`].
#[derive(Debug, Clone)]
pub struct LinkPanel {
    dispatcher: Dispatcher,
    entries: Vec<PanelEntry>,
}

impl LinkPanel {
    /// Builds the panel entries for `targets`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchTargetsError`] when a target is blank.
    pub fn new(
        dispatcher: Dispatcher,
        targets: &LaunchTargets,
    ) -> Result<Self, LaunchTargetsError> {
        let entries = targets
            .actions()?
            .into_iter()
            .map(|(subject, action)| PanelEntry {
                affordance: dispatcher.affordance(&action, &subject),
                action,
            })
            .collect();
        Ok(Self {
            dispatcher,
            entries,
        })
    }

    /// Rendered entries in display order.
    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    /// Dispatcher the panel routes through.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Dispatches the entry at `index`; `None` when out of range.
    ///
    /// Link entries resolve to the rendered link, so navigation carries the same label the panel
    /// shows.
    pub fn activate(&self, index: usize) -> Option<Dispatch<'_>> {
        let entry = self.entries.get(index)?;
        Some(match &entry.affordance {
            Affordance::Link(link) => Dispatch::Hyperlink(link.clone()),
            Affordance::Button { .. } => self.dispatcher.dispatch(&entry.action),
        })
    }

    /// Dispatches the entry at `index`, awaits the outcome and logs it.
    pub async fn activate_and_report(&self, index: usize) -> Option<Result<(), DispatchError>> {
        let entry = self.entries.get(index)?;
        Some(self.dispatcher.dispatch_and_report(&entry.action).await)
    }

    /// Renders the panel as static HTML.
    pub fn to_html(&self) -> String {
        let mut html = format!("<div><div class=\"text-xl\">{PANEL_TITLE}</div>");
        for entry in &self.entries {
            html.push_str("<div>");
            html.push_str(&entry.affordance.to_html());
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::{closure::Closure, prelude::*, JsCast};

    use super::*;

    fn js_error(message: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&message.to_string())
    }

    fn render_entry(
        document: &web_sys::Document,
        dispatcher: &Dispatcher,
        entry: &PanelEntry,
    ) -> Result<web_sys::Element, JsValue> {
        match &entry.affordance {
            Affordance::Button { label, action } => {
                let button = document.create_element("button")?;
                button.set_text_content(Some(label));
                let dispatcher = dispatcher.clone();
                let action = action.clone();
                let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                    let dispatcher = dispatcher.clone();
                    let action = action.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let _ = dispatcher.dispatch_and_report(&action).await;
                    });
                }));
                button
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
                on_click.forget();
                Ok(button)
            }
            Affordance::Link(link) => {
                let anchor = document.create_element("a")?;
                anchor.set_attribute("href", &link.href)?;
                anchor.set_text_content(Some(&link.label));
                Ok(anchor)
            }
        }
    }

    /// Renders the link panel for `targets_json` into `document.body`.
    #[wasm_bindgen]
    pub fn mount_link_panel(targets_json: &str) -> Result<(), JsValue> {
        crate::init_logging();
        let targets = LaunchTargets::from_json_str(targets_json).map_err(js_error)?;
        let panel = LinkPanel::new(crate::build_dispatcher(), &targets).map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| js_error("window unavailable"))?;
        let document = window
            .document()
            .ok_or_else(|| js_error("document unavailable"))?;
        let body = document.body().ok_or_else(|| js_error("body unavailable"))?;

        let root = document.create_element("div")?;
        let title = document.create_element("div")?;
        title.set_class_name("text-xl");
        title.set_text_content(Some(PANEL_TITLE));
        root.append_child(&title)?;
        for entry in panel.entries() {
            let row = document.create_element("div")?;
            row.append_child(&render_entry(&document, panel.dispatcher(), entry)?)?;
            root.append_child(&row)?;
        }
        body.append_child(&root)?;
        log::info!(
            "mounted link panel for {} environment",
            panel.dispatcher().environment()
        );
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::mount_link_panel;

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{Environment, RecordingBridge};
    use pretty_assertions::assert_eq;

    use super::*;

    fn targets() -> LaunchTargets {
        LaunchTargets {
            file_path: "/tmp/a.jpg".to_string(),
            url: "https://www.google.com".to_string(),
            url_label: Some("Google".to_string()),
        }
    }

    #[test]
    fn browser_panel_renders_links_only() {
        let bridge = RecordingBridge::default();
        let dispatcher = Dispatcher::new(Environment::Browser, Rc::new(bridge.clone()));
        let panel = LinkPanel::new(dispatcher, &targets()).expect("panel");

        assert_eq!(
            panel.to_html(),
            "<div><div class=\"text-xl\">Tauri Link and Files</div>\
             <div><a href=\"/tmp/a.jpg\">Open File from web app</a></div>\
             <div><a href=\"https://www.google.com\">Open Google from web app</a></div></div>"
        );
        for (index, entry) in panel.entries().iter().enumerate() {
            let dispatch = panel.activate(index).expect("entry");
            match &entry.affordance {
                Affordance::Link(rendered) => assert_eq!(dispatch.hyperlink(), Some(rendered)),
                Affordance::Button { .. } => panic!("browser panel rendered a button"),
            }
        }
        assert_eq!(bridge.call_count(), 0);
    }

    #[test]
    fn desktop_panel_activates_native_commands() {
        let bridge = RecordingBridge::default();
        bridge.fail_target("https://www.google.com", DispatchError::BridgeUnavailable);
        let dispatcher = Dispatcher::new(Environment::Desktop, Rc::new(bridge.clone()));
        let panel = LinkPanel::new(dispatcher, &targets()).expect("panel");

        assert_eq!(
            panel.to_html(),
            "<div><div class=\"text-xl\">Tauri Link and Files</div>\
             <div><button data-command=\"open_file\">Open File from Tauri Desktop app</button></div>\
             <div><button data-command=\"open_url\">Open Google from Tauri Desktop</button></div></div>"
        );
        let labels: Vec<&str> = panel
            .entries()
            .iter()
            .map(|entry| entry.affordance.label())
            .collect();
        assert_eq!(
            labels,
            vec!["Open File from Tauri Desktop app", "Open Google from Tauri Desktop"]
        );
        assert!(panel.activate(0).expect("entry").hyperlink().is_none());
        assert_eq!(bridge.call_count(), 0);
        assert_eq!(block_on(panel.activate_and_report(0)), Some(Ok(())));
        assert_eq!(
            block_on(panel.activate_and_report(1)),
            Some(Err(DispatchError::BridgeUnavailable))
        );
        assert_eq!(block_on(panel.activate_and_report(2)), None);
        assert_eq!(
            bridge.calls(),
            vec![
                Action::OpenFile("/tmp/a.jpg".to_string()),
                Action::OpenUrl("https://www.google.com".to_string()),
            ]
        );
    }
}
