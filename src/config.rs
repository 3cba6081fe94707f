//! Line style configuration schema and I/O.

use serde::{Deserialize, Serialize};
use std::path::Path;

use glam::Vec4;
use log::debug;

use crate::error::{LineMeshError, LineMeshResult};
use crate::vector::line_helpers::DEFAULT_MITER_LENGTH_LIMIT;
use crate::vector::line_shader::{LineDrawParams, LineShaderConfig};
use crate::vector::line_types::{LineCapStyle, LineJoinStyle};

/// Miter limit given either as a length relative to the line width or as the
/// smallest join angle still drawn as a miter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiterLimit {
    Length(f32),
    AngleDegrees(f32),
}

impl Default for MiterLimit {
    fn default() -> Self {
        MiterLimit::Length(DEFAULT_MITER_LENGTH_LIMIT)
    }
}

/// Appearance of lines drawn from a generated line mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyleConfig {
    /// Width in screen pixels
    pub width: f32,

    /// Antialiased edge width in screen pixels
    pub smoothness: f32,

    pub cap_style: LineCapStyle,

    pub join_style: LineJoinStyle,

    /// Only used with miter joins
    pub miter_limit: MiterLimit,

    /// Linear RGBA
    pub color: [f32; 4],

    pub background_color: [f32; 4],
}

impl Default for LineStyleConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            smoothness: 0.0,
            cap_style: LineCapStyle::default(),
            join_style: LineJoinStyle::default(),
            miter_limit: MiterLimit::default(),
            color: [1.0; 4],
            background_color: [0.0; 4],
        }
    }
}

impl LineStyleConfig {
    pub fn from_json_str(json: &str) -> LineMeshResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a style from a JSON file
    pub fn from_path(path: &Path) -> LineMeshResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn to_json_string(&self) -> LineMeshResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the style to a JSON file
    pub fn save(&self, path: &Path) -> LineMeshResult<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Range checks on values that don't go through the miter conversion.
    pub fn validate(&self) -> LineMeshResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(LineMeshError::config(format!(
                "width must be positive and finite, got {}",
                self.width
            )));
        }
        if !(self.smoothness.is_finite() && self.smoothness >= 0.0) {
            return Err(LineMeshError::config(format!(
                "smoothness must be non-negative and finite, got {}",
                self.smoothness
            )));
        }
        Ok(())
    }

    /// Shader configuration with this style's cap and join applied.
    pub fn shader_config(&self, base: LineShaderConfig) -> LineShaderConfig {
        base.with_cap_style(self.cap_style)
            .with_join_style(self.join_style)
    }

    /// Validated draw parameters for a shader compiled from `base`.
    pub fn draw_params(&self, base: &LineShaderConfig) -> LineMeshResult<LineDrawParams> {
        self.validate()?;
        let mut params = LineDrawParams::new(self.shader_config(*base));
        params
            .set_width(self.width)
            .set_smoothness(self.smoothness)
            .set_color(Vec4::from_array(self.color))
            .set_background_color(Vec4::from_array(self.background_color));

        match (self.join_style, self.miter_limit) {
            (LineJoinStyle::Miter, MiterLimit::Length(limit)) => {
                params.set_miter_length_limit(limit)?;
            }
            (LineJoinStyle::Miter, MiterLimit::AngleDegrees(angle)) => {
                params.set_miter_angle_limit(angle.to_radians())?;
            }
            (LineJoinStyle::Bevel, limit) => {
                debug!("LineStyleConfig: ignoring {:?} for bevel joins", limit);
            }
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shader_defaults() {
        let config = LineStyleConfig::default();
        let params = config
            .draw_params(&LineShaderConfig::two_dimensional())
            .unwrap();
        assert_eq!(params, LineDrawParams::new(LineShaderConfig::two_dimensional()));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = LineStyleConfig::from_json_str(
            r#"{ "width": 8.5, "cap_style": "round", "miter_limit": { "angle_degrees": 90.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.width, 8.5);
        assert_eq!(config.cap_style, LineCapStyle::Round);
        assert_eq!(config.join_style, LineJoinStyle::Miter);
        assert_eq!(config.miter_limit, MiterLimit::AngleDegrees(90.0));
        assert_eq!(config.color, [1.0; 4]);

        let params = config
            .draw_params(&LineShaderConfig::three_dimensional())
            .unwrap();
        assert_eq!(params.config().cap_style(), LineCapStyle::Round);
        assert!(params.miter_limit().unwrap().abs() < 1e-6);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            LineStyleConfig::from_json_str(r#"{ "width": 0.0 }"#),
            Err(LineMeshError::Config(_))
        ));
        assert!(matches!(
            LineStyleConfig::from_json_str(r#"{ "join_style": "round" }"#),
            Err(LineMeshError::Json(_))
        ));

        let config = LineStyleConfig {
            miter_limit: MiterLimit::Length(0.5),
            ..Default::default()
        };
        assert!(matches!(
            config.draw_params(&LineShaderConfig::two_dimensional()),
            Err(LineMeshError::InvalidMiterLimit { .. })
        ));
    }

    #[test]
    fn bevel_ignores_miter_limit() {
        let config = LineStyleConfig {
            join_style: LineJoinStyle::Bevel,
            miter_limit: MiterLimit::Length(0.5),
            ..Default::default()
        };
        let params = config
            .draw_params(&LineShaderConfig::two_dimensional())
            .unwrap();
        assert_eq!(params.miter_limit(), None);
    }

    #[test]
    fn json_round_trip() {
        let config = LineStyleConfig {
            width: 3.0,
            join_style: LineJoinStyle::Bevel,
            ..Default::default()
        };
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"bevel\""));
        assert_eq!(LineStyleConfig::from_json_str(&json).unwrap(), config);
    }
}
