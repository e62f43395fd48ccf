//! Platform-free engine behind the title reveal surface.
//!
//! Nothing in here touches the DOM: the web front-end feeds events into a
//! [`Stage`] and draws the [`PreviewFrame`]s it returns.

pub mod anchor;
pub mod breakpoint;
pub mod catalog;
pub mod constants;
pub mod hint;
pub mod lifecycle;
pub mod placement;
pub mod pointer;
pub mod selection;
pub mod stage;

pub use anchor::*;
pub use breakpoint::{BreakpointClass, LayoutMode, ResponsiveSize, Viewport};
pub use catalog::*;
pub use constants::*;
pub use hint::*;
pub use lifecycle::*;
pub use placement::*;
pub use pointer::*;
pub use selection::*;
pub use stage::*;
