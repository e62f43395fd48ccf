pub mod pointer;
pub mod titles;
pub mod viewport;

pub use pointer::{wire_outside_tap, wire_pointer_tracking};
pub use titles::wire_title_handlers;
pub use viewport::wire_resize;

use crate::clock::Clock;
use crate::dom::DomGeometry;
use reveal_core::{SelectionEvent, Stage};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handles every listener closes over.
#[derive(Clone)]
pub struct InputWiring {
    pub stage: Rc<RefCell<Stage>>,
    pub geometry: Rc<DomGeometry>,
    pub clock: Clock,
}

impl InputWiring {
    /// Route a selection event through the stage and refresh the title
    /// highlight when the active title changed.
    pub fn select(&self, event: SelectionEvent) {
        let now = self.clock.now();
        let transition = self
            .stage
            .borrow_mut()
            .selection_event(event, &*self.geometry, now);
        if let Some(t) = transition {
            log::info!("[select] {:?} -> {:?}", t.from, t.to);
            self.geometry.mark_active(t.to.active_id());
        }
    }
}
