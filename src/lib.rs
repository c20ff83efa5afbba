//! Fixed-resolution 2D drawing and text canvas built on Cairo and Pango.
//!
//! `retrocanvas` exposes a game-framework-style graphics API over a fixed
//! 640×480 surface: primitive drawing, texture blitting, a transform stack,
//! and font rendering. All drawing state lives in an explicit [`Graphics`]
//! context created at startup, intended to be driven by a single game loop
//! (and bound into a scripting layer above this crate).
//!
//! ```no_run
//! use retrocanvas::{Color, Config, DrawParams, Graphics};
//!
//! let config = Config::load()?;
//! let mut gfx = Graphics::new(&config)?;
//!
//! gfx.clear(None);
//! gfx.set_color(Color::rgb(255, 0, 0));
//! gfx.circle(true, 320.0, 240.0, 40.0);
//! gfx.print("hello", &DrawParams::at(16.0, 16.0));
//! gfx.present();
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod graphics;
pub mod texture;

pub use color::Color;
pub use config::Config;
pub use error::GraphicsError;
pub use font::{Font, FontId};
pub use graphics::{DrawParams, Graphics};
pub use texture::{Quad, Texture};
