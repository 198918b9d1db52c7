//! Rasterizer configuration
//!
//! Set between draw calls, read-only while one is in flight.

use std::convert::TryFrom;
use std::str::FromStr;

use crate::error::{RasterError, RasterResult};
use crate::geometry::FaceWinding;
use crate::multisample::MAX_MULTISAMPLE_COUNT;

/// Which triangles, by screen winding, are discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    /// Keep every triangle, including degenerate ones
    None,
    /// Discard clockwise triangles
    Clockwise,
    /// Discard counter-clockwise triangles
    CounterClockwise,
}

impl CullMode {
    /// Decides whether a triangle with the given winding survives. `None` winding means zero area.
    pub fn keeps(self, winding: Option<FaceWinding>) -> bool {
        match (self, winding) {
            (CullMode::None, _) => true,
            (_, None) => false,
            (CullMode::Clockwise, Some(winding)) => winding != FaceWinding::Clockwise,
            (CullMode::CounterClockwise, Some(winding)) => winding != FaceWinding::CounterClockwise,
        }
    }
}

impl Default for CullMode {
    fn default() -> CullMode { CullMode::CounterClockwise }
}

/// Raw API value: 1 = none, 2 = clockwise, 3 = counter-clockwise
impl TryFrom<u32> for CullMode {
    type Error = RasterError;

    fn try_from(value: u32) -> RasterResult<CullMode> {
        match value {
            1 => Ok(CullMode::None),
            2 => Ok(CullMode::Clockwise),
            3 => Ok(CullMode::CounterClockwise),
            _ => Err(RasterError::UnsupportedCullMode(value)),
        }
    }
}

impl FromStr for CullMode {
    type Err = RasterError;

    fn from_str(s: &str) -> RasterResult<CullMode> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(CullMode::None),
            "cw" | "clockwise" => Ok(CullMode::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" => Ok(CullMode::CounterClockwise),
            _ => Err(RasterError::UnknownModeName(s.to_owned())),
        }
    }
}

/// How covered samples are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Only samples near a triangle edge are covered
    Wireframe,
    /// Every sample inside the triangle is covered
    Solid,
}

impl Default for FillMode {
    fn default() -> FillMode { FillMode::Solid }
}

/// Raw API value: 2 = wireframe, 3 = solid
impl TryFrom<u32> for FillMode {
    type Error = RasterError;

    fn try_from(value: u32) -> RasterResult<FillMode> {
        match value {
            2 => Ok(FillMode::Wireframe),
            3 => Ok(FillMode::Solid),
            _ => Err(RasterError::UnsupportedFillMode(value)),
        }
    }
}

impl FromStr for FillMode {
    type Err = RasterError;

    fn from_str(s: &str) -> RasterResult<FillMode> {
        match s.trim().to_lowercase().as_str() {
            "wireframe" => Ok(FillMode::Wireframe),
            "solid" => Ok(FillMode::Solid),
            _ => Err(RasterError::UnknownModeName(s.to_owned())),
        }
    }
}

/// Treatment of samples lying exactly on a triangle edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillConvention {
    /// Edge samples are covered. Adjacent triangles both cover samples on their shared edge.
    Inclusive,
    /// Edge samples are covered only on top and left edges, so a shared edge is covered exactly once.
    TopLeft,
}

impl Default for FillConvention {
    fn default() -> FillConvention { FillConvention::Inclusive }
}

/// Per draw call rasterizer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterizerState {
    pub cull_mode: CullMode,
    pub fill_mode: FillMode,
    pub fill_convention: FillConvention,
    /// Samples per pixel, 1 meaning no multisampling
    pub multisample_count: u32,
    /// Maximum distance in pixels from an edge for a sample to be covered in wireframe mode
    pub wireframe_width: f32,
    /// Clip against the near and far planes as well as the sides of the view volume
    pub depth_clip: bool,
}

impl Default for RasterizerState {
    fn default() -> RasterizerState {
        RasterizerState {
            cull_mode: CullMode::default(),
            fill_mode: FillMode::default(),
            fill_convention: FillConvention::default(),
            multisample_count: 1,
            wireframe_width: 1.0,
            depth_clip: true,
        }
    }
}

impl RasterizerState {
    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> RasterizerState {
        self.cull_mode = cull_mode;
        self
    }

    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> RasterizerState {
        self.fill_mode = fill_mode;
        self
    }

    pub fn with_fill_convention(mut self, fill_convention: FillConvention) -> RasterizerState {
        self.fill_convention = fill_convention;
        self
    }

    pub fn with_multisample_count(mut self, multisample_count: u32) -> RasterizerState {
        self.multisample_count = multisample_count;
        self
    }

    pub fn with_wireframe_width(mut self, wireframe_width: f32) -> RasterizerState {
        self.wireframe_width = wireframe_width;
        self
    }

    pub fn with_depth_clip(mut self, depth_clip: bool) -> RasterizerState {
        self.depth_clip = depth_clip;
        self
    }

    pub fn validate(&self) -> RasterResult<()> {
        if self.multisample_count == 0 || self.multisample_count > MAX_MULTISAMPLE_COUNT {
            return Err(RasterError::InvalidMultisampleCount(self.multisample_count));
        }

        if !(self.wireframe_width.is_finite() && self.wireframe_width > 0.0) {
            return Err(RasterError::InvalidWireframeWidth(self.wireframe_width));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cull_modes_keep_by_winding() {
        use crate::geometry::FaceWinding::*;

        assert!(CullMode::None.keeps(Some(Clockwise)));
        assert!(CullMode::None.keeps(None));
        assert!(CullMode::Clockwise.keeps(Some(CounterClockwise)));
        assert!(!CullMode::Clockwise.keeps(Some(Clockwise)));
        assert!(!CullMode::Clockwise.keeps(None));
        assert!(CullMode::CounterClockwise.keeps(Some(Clockwise)));
        assert!(!CullMode::CounterClockwise.keeps(Some(CounterClockwise)));
        assert!(!CullMode::CounterClockwise.keeps(None));
    }

    #[test]
    fn raw_mode_values() {
        assert_eq!(FillMode::try_from(2), Ok(FillMode::Wireframe));
        assert_eq!(FillMode::try_from(3), Ok(FillMode::Solid));
        assert_eq!(FillMode::try_from(7), Err(RasterError::UnsupportedFillMode(7)));
        assert_eq!(CullMode::try_from(1), Ok(CullMode::None));
        assert_eq!(CullMode::try_from(0), Err(RasterError::UnsupportedCullMode(0)));
    }

    #[test]
    fn mode_names() {
        assert_eq!("Wireframe".parse::<FillMode>(), Ok(FillMode::Wireframe));
        assert_eq!(" ccw ".parse::<CullMode>(), Ok(CullMode::CounterClockwise));
        assert!("dotted".parse::<FillMode>().is_err());
    }

    #[test]
    fn state_validation() {
        assert!(RasterizerState::default().validate().is_ok());
        assert_eq!(RasterizerState::default().with_multisample_count(0).validate(),
                   Err(RasterError::InvalidMultisampleCount(0)));
        assert_eq!(RasterizerState::default().with_multisample_count(64).validate(),
                   Err(RasterError::InvalidMultisampleCount(64)));
        assert!(RasterizerState::default().with_wireframe_width(-1.0).validate().is_err());
    }
}
