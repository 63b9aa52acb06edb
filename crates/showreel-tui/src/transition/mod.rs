//! Track transition system
//!
//! Moves the rendered track offset towards the carousel's target offset
//! over a configurable duration and easing curve, the terminal counterpart of
//! a CSS `transition-transform`.
//!
//! # Layers
//!
//! ## Atoms
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Progress and interpolation helpers
//! - `config` - Helpers over [`TransitionConfig`] from showreel-core
//!
//! ## Molecule
//! - `animation` - [`OffsetAnimator`], combining the atoms
//!
//! # Usage
//!
//! ```ignore
//! use showreel_tui::transition::OffsetAnimator;
//!
//! let mut animator = OffsetAnimator::default();
//! animator.set_target(-300.0);
//!
//! // every frame
//! let offset_percent = animator.update();
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::OffsetAnimator;
pub use config::{TransitionConfig, TransitionConfigExt};
pub use easing::{EasingType, EasingTypeExt};
