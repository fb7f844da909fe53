#![forbid(unsafe_code)]

//! [`QuerySource`] / [`RowSource`] over a `web_sys::Document`.

use rowfilter_core::{FilterConfig, FilterError, QuerySource, Result, RowSource, Visibility};
use tracing::trace;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

const DISPLAY_PROPERTY: &str = "display";
const ROW_SELECTOR: &str = "tr";

pub(crate) fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn host_error(context: &str, value: &JsValue) -> FilterError {
    FilterError::host(format!("{context}: {}", js_error_message(value)))
}

/// The live page, looked up by the ids in a [`FilterConfig`].
///
/// Elements are resolved on every call, so the page may add or replace the
/// search box and the table between passes.
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
    config: FilterConfig,
}

impl DomPage {
    #[must_use]
    pub fn new(document: Document, config: FilterConfig) -> Self {
        Self { document, config }
    }

    /// The current window's document, if there is one.
    pub fn current(config: FilterConfig) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| FilterError::host("no window.document in this context"))?;
        Ok(Self::new(document, config))
    }

    pub(crate) fn input_element(&self) -> Result<HtmlInputElement> {
        let id = &self.config.input_id;
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| FilterError::MissingInput { id: id.clone() })?;
        element
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| FilterError::host(format!("#{id} is not an <input> element")))
    }

    fn table_element(&self) -> Result<Element> {
        let id = &self.config.table_id;
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| FilterError::MissingTable { id: id.clone() })
    }
}

impl QuerySource for DomPage {
    fn read_query(&self) -> Result<String> {
        Ok(self.input_element()?.value())
    }
}

impl RowSource for DomPage {
    type Row = HtmlElement;

    fn rows(&mut self) -> Result<Vec<HtmlElement>> {
        let table = self.table_element()?;
        let list = table
            .query_selector_all(ROW_SELECTOR)
            .map_err(|err| host_error("querySelectorAll failed", &err))?;
        let rows: Vec<HtmlElement> = (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        trace!(table = %self.config.table_id, rows = rows.len(), "collected rows");
        Ok(rows)
    }

    fn row_text(&self, row: &HtmlElement) -> Result<String> {
        Ok(row.inner_text())
    }

    fn set_visibility(&mut self, row: &HtmlElement, visibility: Visibility) -> Result<()> {
        row.style()
            .set_property(DISPLAY_PROPERTY, visibility.display_value())
            .map_err(|err| host_error("style.setProperty failed", &err))
    }
}
