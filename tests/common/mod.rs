//! In-memory document used to exercise the menu without a browser.
//!
//! Elements live in an arena in document order. Clicks bubble from the
//! target through its ancestors and finish at the document, the way a
//! browser dispatches them.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use mobile_menu::prelude::*;

pub type NodeId = usize;

/// The document root; every element descends from it
pub const ROOT: NodeId = 0;

struct Node {
    tag: String,
    parent: Option<NodeId>,
    classes: BTreeSet<String>,
    text: String,
}

struct Listener {
    id: u64,
    /// `None` listens on the document itself
    on: Option<NodeId>,
    handler: Rc<dyn Fn(&NodeId)>,
}

#[derive(Default)]
struct Inner {
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<Listener>>,
    next_listener: Cell<u64>,
    read_only: Cell<bool>,
}

#[derive(Clone)]
pub struct FakeDom {
    inner: Rc<Inner>,
}

impl FakeDom {
    pub fn new() -> Self {
        let dom = Self {
            inner: Rc::new(Inner::default()),
        };
        dom.inner.nodes.borrow_mut().push(Node {
            tag: "#document".to_string(),
            parent: None,
            classes: BTreeSet::new(),
            text: String::new(),
        });
        dom
    }

    /// Append an element under `parent`
    pub fn element(&self, parent: NodeId, tag: &str, classes: &[&str], text: &str) -> NodeId {
        let mut nodes = self.inner.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_string(),
            parent: Some(parent),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text: text.to_string(),
        });
        nodes.len() - 1
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.inner.nodes.borrow()[id].classes.contains(class)
    }

    pub fn text(&self, id: NodeId) -> String {
        self.inner.nodes.borrow()[id].text.clone()
    }

    /// Make every class/text write fail, like a detached or frozen node
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.read_only.set(read_only);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// `node` is `ancestor` or one of its descendants
    pub fn is_within(&self, node: NodeId, ancestor: NodeId) -> bool {
        let nodes = self.inner.nodes.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = nodes[id].parent;
        }
        false
    }

    /// Dispatch a click on `target`: element listeners along the bubbling
    /// path first, then document listeners
    pub fn click(&self, target: NodeId) {
        let path: Vec<NodeId> = {
            let nodes = self.inner.nodes.borrow();
            let mut path = Vec::new();
            let mut current = Some(target);
            while let Some(id) = current {
                path.push(id);
                current = nodes[id].parent;
            }
            path
        };

        let mut handlers: Vec<Rc<dyn Fn(&NodeId)>> = Vec::new();
        {
            let listeners = self.inner.listeners.borrow();
            for id in &path {
                handlers.extend(
                    listeners
                        .iter()
                        .filter(|l| l.on == Some(*id))
                        .map(|l| Rc::clone(&l.handler)),
                );
            }
            handlers.extend(
                listeners
                    .iter()
                    .filter(|l| l.on.is_none())
                    .map(|l| Rc::clone(&l.handler)),
            );
        }

        for handler in handlers {
            handler(&target);
        }
    }

    fn matches(node: &Node, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => node.classes.contains(class),
            None => node.tag == selector,
        }
    }

    fn write(&self, id: NodeId, update: impl FnOnce(&mut Node)) -> MenuResult<()> {
        if self.inner.read_only.get() {
            return Err(MenuError::Dom(format!("node {id} is read-only")));
        }
        update(&mut self.inner.nodes.borrow_mut()[id]);
        Ok(())
    }
}

pub struct FakeSurface {
    dom: FakeDom,
    control: NodeId,
    container: NodeId,
    config: MenuConfig,
}

impl MenuSurface for FakeSurface {
    type Target = NodeId;

    fn locate(&self, target: &NodeId) -> ClickOrigin {
        if self.dom.is_within(*target, self.container) {
            ClickOrigin::Container
        } else if self.dom.is_within(*target, self.control) {
            ClickOrigin::Control
        } else {
            ClickOrigin::Outside
        }
    }

    fn rendered_state(&self) -> MenuState {
        MenuState::from_open(self.dom.has_class(self.container, &self.config.open_class))
    }

    fn render(&self, state: MenuState) -> MenuResult<()> {
        let open = state.is_open();
        let set = |classes: &mut BTreeSet<String>, class: &str| {
            if open {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        };
        self.dom
            .write(self.container, |n| set(&mut n.classes, &self.config.open_class))?;
        self.dom.write(self.control, |n| {
            set(&mut n.classes, &self.config.active_class);
            n.text = state
                .glyph(&self.config.open_glyph, &self.config.closed_glyph)
                .to_string();
        })
    }
}

pub struct FakeListener {
    dom: FakeDom,
    id: u64,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        self.dom
            .inner
            .listeners
            .borrow_mut()
            .retain(|l| l.id != self.id);
    }
}

impl MenuDocument for FakeDom {
    type Element = NodeId;
    type Surface = FakeSurface;
    type Listener = FakeListener;

    fn query(&self, selector: &str) -> MenuResult<Option<NodeId>> {
        let nodes = self.inner.nodes.borrow();
        Ok(nodes
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, node)| Self::matches(node, selector))
            .map(|(id, _)| id))
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> MenuResult<Vec<NodeId>> {
        let candidates: Vec<NodeId> = {
            let nodes = self.inner.nodes.borrow();
            nodes
                .iter()
                .enumerate()
                .filter(|(id, node)| *id != *scope && Self::matches(node, selector))
                .map(|(id, _)| id)
                .collect()
        };
        Ok(candidates
            .into_iter()
            .filter(|id| self.is_within(*id, *scope))
            .collect())
    }

    fn surface(&self, control: &NodeId, container: &NodeId, config: &MenuConfig) -> FakeSurface {
        FakeSurface {
            dom: self.clone(),
            control: *control,
            container: *container,
            config: config.clone(),
        }
    }

    fn on_click(
        &self,
        source: ClickSource<'_, NodeId>,
        handler: ClickHandler<NodeId>,
    ) -> MenuResult<FakeListener> {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        let on = match source {
            ClickSource::Element(node) => Some(*node),
            ClickSource::Document => None,
        };
        self.inner.listeners.borrow_mut().push(Listener {
            id,
            on,
            handler: Rc::from(handler),
        });
        Ok(FakeListener {
            dom: self.clone(),
            id,
        })
    }
}

/// The stock page: a header with the control, the links list and some
/// unrelated content
pub struct Page {
    pub dom: FakeDom,
    pub control: NodeId,
    pub container: NodeId,
    pub items: Vec<NodeId>,
    pub links: Vec<NodeId>,
    pub content: NodeId,
}

impl Page {
    pub fn new(link_count: usize) -> Self {
        let dom = FakeDom::new();
        let body = dom.element(ROOT, "body", &[], "");
        let header = dom.element(body, "header", &[], "");
        let control = dom.element(header, "button", &["mobile-menu-btn"], "☰");
        let container = dom.element(header, "ul", &["nav-links"], "");
        let mut items = Vec::new();
        let mut links = Vec::new();
        for i in 0..link_count {
            let item = dom.element(container, "li", &[], "");
            links.push(dom.element(item, "a", &[], &format!("Link {i}")));
            items.push(item);
        }
        let content = dom.element(body, "p", &[], "content");
        Self {
            dom,
            control,
            container,
            items,
            links,
            content,
        }
    }

    pub fn is_open(&self) -> bool {
        self.dom.has_class(self.container, "mobile-menu-open")
    }

    /// Container marker, control marker and glyph all agree with `open`
    pub fn assert_rendered(&self, open: bool) {
        assert_eq!(self.dom.has_class(self.container, "mobile-menu-open"), open);
        assert_eq!(self.dom.has_class(self.control, "active"), open);
        assert_eq!(self.dom.text(self.control), if open { "✕" } else { "☰" });
    }
}
