pub mod rasterization;

pub mod divide;
pub mod clip;
pub mod cull;
pub mod screen;

pub use self::divide::{PerspectiveDivider, PerspectiveDivide};
pub use self::clip::{Clipper, Clip};
pub use self::cull::{Culler, Cull};
pub use self::screen::{ScreenMapper, ScreenMap};
