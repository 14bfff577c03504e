//! Art gallery kiosk.
//!
//! The library holds everything that does not need a window: the hero
//! carousel controller, site content, routing, forms and layout. The
//! `window` feature adds the raylib page shell used by the `gallery` binary.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod decor;
pub mod error;
pub mod forms;
pub mod layout;
pub mod lightbox;
pub mod routes;
pub mod slide;
pub mod state;
pub mod texture_loader;

#[cfg(feature = "window")]
pub mod view;

pub use carousel::{Carousel, RestartPolicy, Transition};
pub use config::{Cli, Config};
pub use routes::Route;
pub use slide::{Slide, SlideDeck};
pub use state::SiteState;
