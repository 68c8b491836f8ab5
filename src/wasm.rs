//! WASM bindings for the mobile menu
//!
//! Implements [`MenuDocument`] and [`MenuSurface`] on top of `web_sys` and
//! exports the page-facing entry points. A page loads the package and calls
//! `mount()` once:
//!
//! ```js
//! import init, { mount } from "./pkg/mobile_menu.js";
//! await init();
//! mount();                                   // stock selectors
//! mount({ control_selector: "#menu" });      // or a partial config
//! ```

use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Node};

use crate::binding::{install, ClickHandler, ClickSource, MenuDocument};
use crate::config::MenuConfig;
use crate::controller::{ClickOrigin, MenuSurface};
use crate::error::{MenuError, MenuResult};
use crate::state::MenuState;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A host page may already have installed a logger
    let _ = console_log::init_with_level(Level::Info);
}

/// Bind the menu once the document's markup is parsed.
///
/// `config` may be `undefined`, `null` or a partial config object.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    let document = window_document()?;

    if document.ready_state() == "loading" {
        let deferred = document.clone();
        let callback = Closure::once_into_js(move || bind_for_page(&deferred, &config));
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        bind_for_page(&document, &config);
    }
    Ok(())
}

/// Bind the menu immediately. Returns whether both elements were found.
#[wasm_bindgen(js_name = "mountNow")]
pub fn mount_now(config: JsValue) -> Result<bool, JsValue> {
    let config = parse_config(config)?;
    let document = DomDocument::new(window_document()?);
    match install(&document, &config)? {
        Some(binding) => {
            binding.persist();
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Raise the console log level (`"debug"`, `"warn"`, ...)
#[wasm_bindgen(js_name = "setLogLevel")]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = level
        .parse::<LevelFilter>()
        .map_err(|_| JsValue::from_str(&format!("unknown log level '{level}'")))?;
    log::set_max_level(filter);
    Ok(())
}

fn bind_for_page(document: &Document, config: &MenuConfig) {
    match install(&DomDocument::new(document.clone()), config) {
        Ok(Some(binding)) => binding.persist(),
        Ok(None) => {}
        Err(e) => log::error!("Mobile menu install failed: {}", e),
    }
}

fn parse_config(value: JsValue) -> Result<MenuConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(MenuConfig::default());
    }
    let config: MenuConfig = serde_wasm_bindgen::from_value(value)?;
    config.validate()?;
    Ok(config)
}

fn window_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Convert a thrown JS value into a [`MenuError`]
fn dom_error(value: JsValue) -> MenuError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    MenuError::Dom(message)
}

// ========================
// Document / surface
// ========================

/// A browser document
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl MenuDocument for DomDocument {
    type Element = Element;
    type Surface = DomSurface;
    type Listener = DomListener;

    fn query(&self, selector: &str) -> MenuResult<Option<Element>> {
        self.document.query_selector(selector).map_err(dom_error)
    }

    fn query_within(&self, scope: &Element, selector: &str) -> MenuResult<Vec<Element>> {
        let list = scope.query_selector_all(selector).map_err(dom_error)?;
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn surface(&self, control: &Element, container: &Element, config: &MenuConfig) -> DomSurface {
        DomSurface {
            control: control.clone(),
            container: container.clone(),
            open_class: config.open_class.clone(),
            active_class: config.active_class.clone(),
            open_glyph: config.open_glyph.clone(),
            closed_glyph: config.closed_glyph.clone(),
        }
    }

    fn on_click(
        &self,
        source: ClickSource<'_, Element>,
        handler: ClickHandler<Event>,
    ) -> MenuResult<DomListener> {
        let target: EventTarget = match source {
            ClickSource::Element(element) => element.clone().into(),
            ClickSource::Document => self.document.clone().into(),
        };
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(&event));
        target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        Ok(DomListener { target, closure })
    }
}

/// The control and container elements plus the configured projections
pub struct DomSurface {
    control: Element,
    container: Element,
    open_class: String,
    active_class: String,
    open_glyph: String,
    closed_glyph: String,
}

impl MenuSurface for DomSurface {
    type Target = Event;

    fn locate(&self, event: &Event) -> ClickOrigin {
        // Targets that aren't nodes (window, XHR, ...) can't be inside either element
        let Some(node) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return ClickOrigin::Outside;
        };
        if self.container.contains(Some(&node)) {
            ClickOrigin::Container
        } else if self.control.contains(Some(&node)) {
            ClickOrigin::Control
        } else {
            ClickOrigin::Outside
        }
    }

    fn rendered_state(&self) -> MenuState {
        MenuState::from_open(self.container.class_list().contains(&self.open_class))
    }

    fn render(&self, state: MenuState) -> MenuResult<()> {
        let open = state.is_open();
        self.container
            .class_list()
            .toggle_with_force(&self.open_class, open)
            .map_err(dom_error)?;
        self.control
            .class_list()
            .toggle_with_force(&self.active_class, open)
            .map_err(dom_error)?;
        self.control
            .set_text_content(Some(state.glyph(&self.open_glyph, &self.closed_glyph)));
        Ok(())
    }
}

/// A registered click listener; removed from its target on drop
pub struct DomListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref())
        {
            log::debug!("Mobile menu listener removal failed: {}", dom_error(e));
        }
    }
}
