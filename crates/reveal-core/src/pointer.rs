//! Pointer tracking normalised around the viewport center.

use crate::breakpoint::Viewport;
use crate::constants::DEFAULT_NORMALIZER;
use glam::Vec2;

/// One raw pointer reading in client coordinates.
#[derive(Clone, Debug)]
pub enum PointerSample<'a> {
    Mouse { client: Vec2 },
    /// Active touch contacts in order; only the first one is used.
    Touch { contacts: &'a [Vec2] },
}

impl PointerSample<'_> {
    fn client(&self) -> Option<Vec2> {
        let p = match self {
            PointerSample::Mouse { client } => *client,
            PointerSample::Touch { contacts } => *contacts.first()?,
        };
        p.is_finite().then_some(p)
    }
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    normalizer: f32,
    vector: Vec2,
}

impl PointerTracker {
    pub fn new(normalizer: f32) -> Self {
        let normalizer = if normalizer.is_finite() && normalizer > 0.0 {
            normalizer
        } else {
            log::warn!(
                "[pointer] invalid normalizer {}, using {}",
                normalizer,
                DEFAULT_NORMALIZER
            );
            DEFAULT_NORMALIZER
        };
        Self {
            normalizer,
            vector: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn normalizer(&self) -> f32 {
        self.normalizer
    }

    /// Latest committed pointer vector.
    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.vector
    }

    /// Fold a move event into the vector. Returns false (and keeps the
    /// previous vector) when the sample carries no usable coordinate.
    pub fn record(&mut self, sample: &PointerSample<'_>, viewport: &Viewport) -> bool {
        match sample.client() {
            Some(client) => {
                self.vector = (client - viewport.center()) / self.normalizer;
                true
            }
            None => false,
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_NORMALIZER)
    }
}
