//! Visual palettes for the light and dark modes.

mod palette;

pub use palette::Palette;
