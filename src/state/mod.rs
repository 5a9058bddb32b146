pub mod frame;
pub mod glyph;
pub mod in_view;
pub mod listeners;
pub mod pointer;
pub mod scroll;

pub use frame::{FrameInputs, FrameSample};
pub use glyph::GlyphAnimator;
pub use in_view::EntryReveal;
pub use listeners::{DomHost, Subscriptions, dom_callback};
pub use pointer::{PointerTracker, primary_touch};
pub use scroll::{ScrollSampler, region_progress};
