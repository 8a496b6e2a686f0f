//! World data - static level layout
//!
//! A level is fixed configuration: world size, obstacle rectangles, rose
//! spawn points, the goal zone and decorative place labels. It is built
//! once before play and read-only afterwards. The default layout ships as
//! an embedded RON file.

mod level;

pub use level::*;
