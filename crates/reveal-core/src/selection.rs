//! Which title is active.
//!
//! Pointer layouts select on hover and clear on leave; touch layouts toggle
//! on tap and clear on a tap outside the title list. Only the transition set
//! matching the current [`LayoutMode`] is live.

use crate::breakpoint::LayoutMode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Active(String),
}

impl Selection {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Selection::Idle => None,
            Selection::Active(id) => Some(id.as_str()),
        }
    }

    pub fn is_active(&self, title_id: &str) -> bool {
        self.active_id() == Some(title_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    PointerEnter(String),
    PointerMove(String),
    PointerLeave(String),
    Tap(String),
    TapOutside,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Selection,
    pub to: Selection,
}

#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &Selection {
        &self.state
    }

    #[inline]
    pub fn active_id(&self) -> Option<&str> {
        self.state.active_id()
    }

    /// Feed one interaction. Returns the transition if the state changed.
    pub fn apply(&mut self, event: SelectionEvent, mode: LayoutMode) -> Option<Transition> {
        let next = match (mode, event) {
            (LayoutMode::Pointer, SelectionEvent::PointerEnter(id))
            | (LayoutMode::Pointer, SelectionEvent::PointerMove(id)) => Selection::Active(id),
            (LayoutMode::Pointer, SelectionEvent::PointerLeave(id)) if self.state.is_active(&id) => {
                Selection::Idle
            }
            (LayoutMode::Touch, SelectionEvent::Tap(id)) => {
                if self.state.is_active(&id) {
                    Selection::Idle
                } else {
                    Selection::Active(id)
                }
            }
            (LayoutMode::Touch, SelectionEvent::TapOutside) => Selection::Idle,
            _ => return None,
        };
        if next == self.state {
            return None;
        }
        let from = std::mem::replace(&mut self.state, next);
        let t = Transition {
            from,
            to: self.state.clone(),
        };
        log::debug!("[select] {:?} -> {:?}", t.from, t.to);
        Some(t)
    }
}
