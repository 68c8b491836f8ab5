//! Menu controller - the toggle and dismiss operations
//!
//! The controller owns the open/closed state cell. Marker classes and the
//! glyph on the control are written from that cell through a
//! [`MenuSurface`] and are never read back to make a decision, so the three
//! handlers can't disagree about whether the panel is open.

use std::cell::Cell;

use crate::error::MenuResult;
use crate::state::MenuState;

/// Where a document click originated relative to the bound elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Target is the container or one of its descendants
    Container,
    /// Target is the toggle control or one of its descendants
    Control,
    /// Anything else, including the document root
    Outside,
}

/// The rendered pair of elements the controller drives
pub trait MenuSurface {
    /// What a document-level click reports as its target
    type Target;

    /// Ancestor-containment test of a click target against the container
    /// and the control. Must return a value for every target.
    fn locate(&self, target: &Self::Target) -> ClickOrigin;

    /// Whether the markup already carries the open marker. Only read once,
    /// when the controller is created.
    fn rendered_state(&self) -> MenuState;

    /// Write markers and glyph for `state`
    fn render(&self, state: MenuState) -> MenuResult<()>;
}

/// Drives a [`MenuSurface`] from a single state cell
#[derive(Debug)]
pub struct MenuController<S: MenuSurface> {
    surface: S,
    state: Cell<MenuState>,
}

impl<S: MenuSurface> MenuController<S> {
    /// Seed the state from the surface and render it so markers and glyph
    /// agree from the start
    pub fn new(surface: S) -> MenuResult<Self> {
        let state = surface.rendered_state();
        surface.render(state)?;
        Ok(Self {
            surface,
            state: Cell::new(state),
        })
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Flip the state (toggle control activated)
    pub fn toggle(&self) -> MenuResult<MenuState> {
        let next = self.state.get().toggled();
        self.set(next)?;
        Ok(next)
    }

    /// Close if the click landed outside both elements while open.
    /// Returns whether the panel was closed.
    pub fn handle_document_click(&self, target: &S::Target) -> MenuResult<bool> {
        if self.surface.locate(target) != ClickOrigin::Outside || !self.state.get().is_open() {
            return Ok(false);
        }
        self.close()?;
        Ok(true)
    }

    /// A link inside the container was activated
    pub fn handle_link_click(&self) -> MenuResult<()> {
        self.close()
    }

    /// Reset to closed regardless of the current state
    pub fn close(&self) -> MenuResult<()> {
        self.set(MenuState::Closed)
    }

    /// The cell only moves once markers and glyph were written
    fn set(&self, state: MenuState) -> MenuResult<()> {
        self.surface.render(state)?;
        self.state.set(state);
        Ok(())
    }
}
