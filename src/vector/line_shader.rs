// src/vector/line_shader.rs
// CPU-side state of the screen-space line expansion shader
// Exists to keep compile-time defines, attribute bindings and uniform values consistent with generated meshes
// RELEVANT FILES: src/vector/line_types.rs, src/vector/line_helpers.rs, src/config.rs

use bitflags::bitflags;
use glam::{Mat3, Mat4, Vec2, Vec4};
use log::debug;

use super::line_helpers::{
    line_miter_angle_limit, line_miter_length_limit, DEFAULT_MITER_LENGTH_LIMIT,
};
use super::line_types::{
    LineCapStyle, LineJoinStyle, LineUniform, ANNOTATION_LOCATION, COLOR_LOCATION,
    NEXT_POSITION_LOCATION, OBJECT_ID_LOCATION, POSITION_LOCATION, PREVIOUS_POSITION_LOCATION,
};
use crate::error::{LineMeshError, LineMeshResult};

/// Location of the per-instance transformation matrix, occupying four consecutive slots.
pub const TRANSFORMATION_MATRIX_LOCATION: u32 = 8;

bitflags! {
    /// Optional features the line shader is compiled with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LineShaderFlags: u8 {
        /// Multiply the color with a per-vertex color attribute
        const VERTEX_COLOR = 1 << 0;
        /// Write an object id to a second output
        const OBJECT_ID = 1 << 1;
        /// Per-instance object id, implies [`LineShaderFlags::OBJECT_ID`]
        const INSTANCED_OBJECT_ID = (1 << 2) | Self::OBJECT_ID.bits();
        /// Per-instance transformation matrix
        const INSTANCED_TRANSFORMATION = 1 << 3;
    }
}

/// Compile-time configuration of the line shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShaderConfig {
    dimensions: u32,
    flags: LineShaderFlags,
    cap_style: LineCapStyle,
    join_style: LineJoinStyle,
}

impl LineShaderConfig {
    pub fn two_dimensional() -> Self {
        Self::with_dimensions(2)
    }

    pub fn three_dimensional() -> Self {
        Self::with_dimensions(3)
    }

    fn with_dimensions(dimensions: u32) -> Self {
        Self {
            dimensions,
            flags: LineShaderFlags::empty(),
            cap_style: LineCapStyle::default(),
            join_style: LineJoinStyle::default(),
        }
    }

    pub fn with_flags(mut self, flags: LineShaderFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_cap_style(mut self, style: LineCapStyle) -> Self {
        self.cap_style = style;
        self
    }

    pub fn with_join_style(mut self, style: LineJoinStyle) -> Self {
        self.join_style = style;
        self
    }

    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    pub fn flags(&self) -> LineShaderFlags {
        self.flags
    }

    pub fn cap_style(&self) -> LineCapStyle {
        self.cap_style
    }

    pub fn join_style(&self) -> LineJoinStyle {
        self.join_style
    }

    /// Preprocessor defines prepended to both shader stages, in order.
    pub fn preprocessor_defines(&self) -> Vec<&'static str> {
        let mut defines = vec![
            match self.cap_style {
                LineCapStyle::Butt => "CAP_STYLE_BUTT",
                LineCapStyle::Square => "CAP_STYLE_SQUARE",
                LineCapStyle::Round => "CAP_STYLE_ROUND",
                LineCapStyle::Triangle => "CAP_STYLE_TRIANGLE",
            },
            match self.join_style {
                LineJoinStyle::Miter => "JOIN_STYLE_MITER",
                LineJoinStyle::Bevel => "JOIN_STYLE_BEVEL",
            },
        ];
        if self.flags.contains(LineShaderFlags::VERTEX_COLOR) {
            defines.push("VERTEX_COLOR");
        }
        defines.push(if self.dimensions == 2 {
            "TWO_DIMENSIONS"
        } else {
            "THREE_DIMENSIONS"
        });
        if self.flags.contains(LineShaderFlags::OBJECT_ID) {
            defines.push("OBJECT_ID");
        }
        if self.flags.contains(LineShaderFlags::INSTANCED_OBJECT_ID) {
            defines.push("INSTANCED_OBJECT_ID");
        }
        if self.flags.contains(LineShaderFlags::INSTANCED_TRANSFORMATION) {
            defines.push("INSTANCED_TRANSFORMATION");
        }
        defines
    }

    /// `(shader input name, location)` pairs the program binds.
    pub fn attribute_bindings(&self) -> Vec<(&'static str, u32)> {
        let mut bindings = vec![
            ("position", POSITION_LOCATION),
            ("previousPosition", PREVIOUS_POSITION_LOCATION),
            ("nextPosition", NEXT_POSITION_LOCATION),
            ("annotation", ANNOTATION_LOCATION),
        ];
        if self.flags.contains(LineShaderFlags::VERTEX_COLOR) {
            bindings.push(("vertexColor", COLOR_LOCATION));
        }
        if self.flags.contains(LineShaderFlags::INSTANCED_OBJECT_ID) {
            bindings.push(("instanceObjectId", OBJECT_ID_LOCATION));
        }
        if self.flags.contains(LineShaderFlags::INSTANCED_TRANSFORMATION) {
            bindings.push(("instancedTransformationMatrix", TRANSFORMATION_MATRIX_LOCATION));
        }
        bindings
    }
}

/// Per-draw uniform values of the line shader.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDrawParams {
    config: LineShaderConfig,
    viewport_size: Vec2,
    transformation_projection: Mat4,
    width: f32,
    smoothness: f32,
    miter_limit: Option<f32>,
    color: Vec4,
    background_color: Vec4,
    object_id: u32,
}

impl LineDrawParams {
    /// Shader defaults: identity transform, width 1, no smoothing, miter length limit 4, white.
    pub fn new(config: LineShaderConfig) -> Self {
        let miter_limit = match config.join_style {
            LineJoinStyle::Miter => {
                line_miter_length_limit("LineDrawParams::new()", DEFAULT_MITER_LENGTH_LIMIT).ok()
            }
            LineJoinStyle::Bevel => None,
        };
        Self {
            config,
            viewport_size: Vec2::ONE,
            transformation_projection: Mat4::IDENTITY,
            width: 1.0,
            smoothness: 0.0,
            miter_limit,
            color: Vec4::ONE,
            background_color: Vec4::ZERO,
            object_id: 0,
        }
    }

    pub fn config(&self) -> &LineShaderConfig {
        &self.config
    }

    pub fn set_viewport_size(&mut self, size: Vec2) -> &mut Self {
        self.viewport_size = size;
        self
    }

    pub fn set_transformation_projection_2d(&mut self, matrix: Mat3) -> LineMeshResult<&mut Self> {
        if self.config.dimensions != 2 {
            return Err(LineMeshError::shader_state(
                "LineDrawParams::set_transformation_projection_2d(): the shader is three-dimensional",
            ));
        }
        self.transformation_projection = Mat4::from_mat3(matrix);
        Ok(self)
    }

    pub fn set_transformation_projection_3d(&mut self, matrix: Mat4) -> LineMeshResult<&mut Self> {
        if self.config.dimensions != 3 {
            return Err(LineMeshError::shader_state(
                "LineDrawParams::set_transformation_projection_3d(): the shader is two-dimensional",
            ));
        }
        self.transformation_projection = matrix;
        Ok(self)
    }

    /// Line width in screen pixels.
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.width = width;
        self
    }

    /// Width of the antialiased edge in screen pixels.
    pub fn set_smoothness(&mut self, smoothness: f32) -> &mut Self {
        self.smoothness = smoothness;
        self
    }

    pub fn set_miter_length_limit(&mut self, limit: f32) -> LineMeshResult<&mut Self> {
        self.ensure_miter("LineDrawParams::set_miter_length_limit()")?;
        self.miter_limit = Some(line_miter_length_limit(
            "LineDrawParams::set_miter_length_limit()",
            limit,
        )?);
        Ok(self)
    }

    /// Miter angle limit in radians.
    pub fn set_miter_angle_limit(&mut self, angle: f32) -> LineMeshResult<&mut Self> {
        self.ensure_miter("LineDrawParams::set_miter_angle_limit()")?;
        self.miter_limit = Some(line_miter_angle_limit(
            "LineDrawParams::set_miter_angle_limit()",
            angle,
        )?);
        Ok(self)
    }

    fn ensure_miter(&self, context: &str) -> LineMeshResult<()> {
        if self.config.join_style != LineJoinStyle::Miter {
            return Err(LineMeshError::shader_state(format!(
                "{context}: the shader was created with {}",
                self.config.join_style
            )));
        }
        Ok(())
    }

    pub fn set_color(&mut self, color: Vec4) -> &mut Self {
        self.color = color;
        self
    }

    /// Color the antialiased edge fades into.
    pub fn set_background_color(&mut self, color: Vec4) -> &mut Self {
        self.background_color = color;
        self
    }

    pub fn set_object_id(&mut self, id: u32) -> LineMeshResult<&mut Self> {
        if !self.config.flags.contains(LineShaderFlags::OBJECT_ID) {
            return Err(LineMeshError::shader_state(
                "LineDrawParams::set_object_id(): the shader was not created with object ID enabled",
            ));
        }
        self.object_id = id;
        Ok(self)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn smoothness(&self) -> f32 {
        self.smoothness
    }

    /// Cosine of the miter angle limit, `None` for bevel joins.
    pub fn miter_limit(&self) -> Option<f32> {
        self.miter_limit
    }

    pub fn color(&self) -> Vec4 {
        self.color
    }

    pub fn background_color(&self) -> Vec4 {
        self.background_color
    }

    pub fn object_id(&self) -> u32 {
        self.object_id
    }

    /// Pack into the uniform block layout.
    pub fn to_uniform(&self) -> LineUniform {
        debug!(
            "LineDrawParams: width {} smoothness {} miter {:?} for {:?}",
            self.width, self.smoothness, self.miter_limit, self.config
        );
        LineUniform {
            transformation_projection: self.transformation_projection.to_cols_array_2d(),
            color: self.color.to_array(),
            background_color: self.background_color.to_array(),
            viewport_size: self.viewport_size.to_array(),
            width: self.width,
            smoothness: self.smoothness,
            miter_limit: self.miter_limit.unwrap_or(0.0),
            object_id: self.object_id,
            _pad: [0; 2],
        }
    }
}
