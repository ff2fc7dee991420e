mod canvas;
mod glyphs;

pub use canvas::GradientPlaceholderCanvas;
