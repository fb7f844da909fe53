#![forbid(unsafe_code)]

//! `wasm-bindgen` exports.

use js_sys::Reflect;
use rowfilter_core::{FilterConfig, FilterError, FilterReport, RowFilter};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::dom::DomPage;

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

fn to_js(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn run_pass(filter: &RowFilter) -> FilterReport {
    match DomPage::current(filter.config().clone()) {
        Ok(mut page) => filter.filter_page(&mut page),
        Err(err) => RowFilter::skipped(&err),
    }
}

/// Show only the `#bookTable` rows containing the `#search` text.
///
/// Never throws: a page without either element is left untouched.
#[wasm_bindgen(js_name = filterBooks)]
pub fn filter_books() {
    install_panic_hook();
    run_pass(&RowFilter::default());
}

const INPUT_EVENT: &str = "input";

/// An `input` listener on the search box, removed when dropped.
struct InputListener {
    input: HtmlInputElement,
    handler: Closure<dyn FnMut()>,
}

impl Drop for InputListener {
    fn drop(&mut self) {
        let _ = self.input.remove_event_listener_with_callback(
            INPUT_EVENT,
            self.handler.as_ref().unchecked_ref(),
        );
    }
}

/// Row filter with configurable element ids.
///
/// ```js
/// const filter = new TableFilter('{"table_id":"authors"}');
/// filter.attach();
/// ```
#[wasm_bindgen]
pub struct TableFilter {
    filter: RowFilter,
    listener: Option<InputListener>,
}

#[wasm_bindgen]
impl TableFilter {
    /// `config_json` is a partial JSON object; omitted fields use the
    /// `#search` / `#bookTable` defaults. Throws on malformed or unknown keys.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<TableFilter, JsValue> {
        install_panic_hook();
        let config = match config_json.as_deref() {
            Some(json) if !json.trim().is_empty() => {
                FilterConfig::from_json(json).map_err(to_js)?
            }
            _ => FilterConfig::default(),
        };
        Ok(Self {
            filter: RowFilter::new(config),
            listener: None,
        })
    }

    /// Run one pass now and return its report as JSON.
    pub fn apply(&self) -> Result<String, JsValue> {
        run_pass(&self.filter).to_json().map_err(to_js)
    }

    /// Re-run the filter on every `input` event of the search box.
    ///
    /// Replaces the listener of any earlier `attach()`, so at most one is
    /// installed per `TableFilter`. It is removed by `detach()` or when the
    /// filter is freed.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        self.detach();
        let mut page = DomPage::current(self.filter.config().clone()).map_err(to_js)?;
        let input = page.input_element().map_err(to_js)?;
        let filter = self.filter.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            filter.filter_page(&mut page);
        });
        input.add_event_listener_with_callback(INPUT_EVENT, handler.as_ref().unchecked_ref())?;
        self.listener = Some(InputListener { input, handler });
        debug!(input = %self.filter.config().input_id, "filter attached");
        Ok(())
    }

    /// Remove the listener installed by `attach()`, if any.
    pub fn detach(&mut self) {
        if self.listener.take().is_some() {
            debug!(input = %self.filter.config().input_id, "filter detached");
        }
    }

    /// Active configuration as JSON.
    pub fn config(&self) -> Result<String, JsValue> {
        self.filter.config().to_json().map_err(to_js)
    }
}
