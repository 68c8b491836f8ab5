//! Binding the controller to a document
//!
//! [`install`] is the initialize step: it resolves the control and the
//! container, and if both exist attaches the toggle listener, one listener
//! per link present at that moment, and the document-wide outside-click
//! listener. Links added to the container later are not picked up.

use std::rc::Rc;

use crate::config::MenuConfig;
use crate::controller::{MenuController, MenuSurface};
use crate::error::MenuResult;
use crate::state::MenuState;

/// Where a click listener is attached
#[derive(Debug, Clone, Copy)]
pub enum ClickSource<'a, E> {
    /// A single element (the control, or one link)
    Element(&'a E),
    /// The whole document; the handler receives the event target
    Document,
}

/// Click callback. Element listeners ignore the argument.
pub type ClickHandler<T> = Box<dyn Fn(&T)>;

/// Click target type reported by a document's surface
pub type TargetOf<D> = <<D as MenuDocument>::Surface as MenuSurface>::Target;

/// A host document the menu can be bound to
pub trait MenuDocument {
    type Element: Clone;
    type Surface: MenuSurface + 'static;
    /// Keeps a registration alive; dropping it removes the listener
    type Listener;

    /// First element matching `selector`, if any
    fn query(&self, selector: &str) -> MenuResult<Option<Self::Element>>;

    /// All descendants of `scope` matching `selector`, in document order
    fn query_within(&self, scope: &Self::Element, selector: &str)
        -> MenuResult<Vec<Self::Element>>;

    fn surface(
        &self,
        control: &Self::Element,
        container: &Self::Element,
        config: &MenuConfig,
    ) -> Self::Surface;

    fn on_click(
        &self,
        source: ClickSource<'_, Self::Element>,
        handler: ClickHandler<TargetOf<Self>>,
    ) -> MenuResult<Self::Listener>;
}

/// A bound menu. Dropping it detaches every listener.
pub struct MenuBinding<D: MenuDocument> {
    controller: Rc<MenuController<D::Surface>>,
    listeners: Vec<D::Listener>,
}

impl<D: MenuDocument> MenuBinding<D> {
    pub fn controller(&self) -> &MenuController<D::Surface> {
        &self.controller
    }

    pub fn state(&self) -> MenuState {
        self.controller.state()
    }

    /// Number of attached listeners: control + links + document
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Keep the listeners attached for the rest of the page's life
    pub fn persist(self) {
        std::mem::forget(self);
    }
}

/// Bind the menu described by `config` into `document`.
///
/// Returns `Ok(None)` without attaching anything when either the control or
/// the container is missing.
pub fn install<D: MenuDocument>(
    document: &D,
    config: &MenuConfig,
) -> MenuResult<Option<MenuBinding<D>>> {
    config.validate()?;

    let control = document.query(&config.control_selector)?;
    let container = document.query(&config.container_selector)?;
    let (Some(control), Some(container)) = (control, container) else {
        log::debug!(
            "Mobile menu not bound: '{}' or '{}' not found",
            config.control_selector,
            config.container_selector
        );
        return Ok(None);
    };

    let links = document.query_within(&container, &config.link_selector)?;
    let surface = document.surface(&control, &container, config);
    let controller = Rc::new(MenuController::new(surface)?);
    let mut listeners = Vec::with_capacity(links.len() + 2);

    let toggle = Rc::clone(&controller);
    listeners.push(document.on_click(
        ClickSource::Element(&control),
        Box::new(move |_: &TargetOf<D>| {
            if let Err(e) = toggle.toggle() {
                log::warn!("Mobile menu toggle failed: {}", e);
            }
        }),
    )?);

    for link in &links {
        let dismiss = Rc::clone(&controller);
        listeners.push(document.on_click(
            ClickSource::Element(link),
            Box::new(move |_: &TargetOf<D>| {
                if let Err(e) = dismiss.handle_link_click() {
                    log::warn!("Mobile menu close on link failed: {}", e);
                }
            }),
        )?);
    }

    let outside = Rc::clone(&controller);
    listeners.push(document.on_click(
        ClickSource::Document,
        Box::new(move |target: &TargetOf<D>| match outside.handle_document_click(target) {
            Ok(true) => log::debug!("Mobile menu dismissed by outside click"),
            Ok(false) => {}
            Err(e) => log::warn!("Mobile menu outside-click close failed: {}", e),
        }),
    )?);

    log::debug!("Mobile menu bound with {} link(s)", links.len());

    Ok(Some(MenuBinding {
        controller,
        listeners,
    }))
}
