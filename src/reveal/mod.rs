//! Text reveal animations
//!
//! Both animators are plain state machines advanced by the caller's frame
//! loop through `poll(now)`; neither owns a timer or a thread.

pub mod animator;
pub mod cycling;
pub mod segment;

pub use animator::{RevealAnimator, RevealPhase};
pub use cycling::CyclingTypewriter;
pub use segment::segments;
