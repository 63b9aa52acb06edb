pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod theme;

pub use carousel::{Carousel, CarouselView, Mode, SlideGeometry, ViewportSource};
pub use catalog::{CaseStudy, Catalog};
pub use config::{AppConfig, CarouselConfig, EasingType, TransitionConfig};
pub use error::{Error, Result};
pub use theme::ThemeMode;
