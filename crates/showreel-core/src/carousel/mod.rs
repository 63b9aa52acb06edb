//! Responsive slide navigation for the case-study carousel
//!
//! The carousel keeps two independent positions: a single-slide index used on
//! narrow viewports and a window index used on wide ones. Viewport width picks
//! which one is authoritative, input is routed to the matching track, and the
//! presentation values (track offset, indicator dots, prev/next controls) are
//! derived from whatever the state holds right now.
//!
//! # Layers
//!
//! ## Atoms
//! - `mode` - viewport width to [`Mode`] classification
//! - `geometry` - slide count, window size and group arithmetic
//! - `indicator`, `offset`, `bounds` - pure derivations for rendering
//!
//! ## Molecules
//! - `track` - the mobile (clamping) and desktop (wrapping) index tracks
//! - `state` - both tracks plus the active mode
//! - `gesture` - pointer drag to swipe state machine
//! - `intent` - routes raw inputs to track commands per mode
//!
//! ## Organism
//! - `engine` - [`Carousel`], owning the state, the gesture tracker and the
//!   viewport source
//!
//! # Usage
//!
//! ```ignore
//! use showreel_core::carousel::{Carousel, FixedViewport, NavInput, SlideGeometry};
//!
//! let mut carousel = Carousel::new(SlideGeometry::new(7, 3, 3), FixedViewport(1024), 768, 10);
//! carousel.handle(NavInput::NextControl);
//! let view = carousel.view();
//! assert_eq!(view.controls.show_prev, true);
//! ```

pub mod bounds;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod indicator;
pub mod intent;
pub mod mode;
pub mod offset;
pub mod state;
pub mod track;

pub use bounds::ControlAdvice;
pub use engine::{Carousel, CarouselView, FixedViewport, ViewportSource};
pub use geometry::SlideGeometry;
pub use gesture::{SwipeDirection, SwipeTracker};
pub use indicator::IndicatorGroups;
pub use intent::{ArrowKey, NavCommand, NavInput};
pub use mode::{Mode, DESKTOP_BREAKPOINT_PX};
pub use offset::TrackOffset;
pub use state::NavigationState;
pub use track::{DesktopTrack, MobileTrack, Track, TrackBounds};
