//! Scene definitions and validation
//!
//! A scene is a fixed vertex buffer, an ordered list of draw groups over
//! disjoint ranges of it, and the camera/projection constants. Validation
//! runs once at startup; anything it catches is a configuration defect, so
//! the renderer itself never re-checks ranges per frame.

use std::ops::Range;

use triorbit_math::{mat4, Mat4};

use crate::path::CameraPath;

/// How a draw group is shaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Single RGBA color for every fragment in the group
    Flat([f32; 4]),
    /// Per-vertex RGB colors from the scene's color buffer
    VertexColor,
}

/// One draw call: a shading style over a contiguous vertex range
///
/// Groups are drawn in declaration order every frame; the order is part of
/// the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawGroup {
    pub shading: Shading,
    pub range: Range<u32>,
}

/// Perspective projection constants, fixed for the whole run
///
/// The aspect ratio is a scene constant rather than the live window ratio;
/// resizing the window does not re-derive it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionParams {
    /// Build the projection matrix
    pub fn matrix(&self) -> Mat4 {
        mat4::perspective(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }
}

/// A complete scene description
#[derive(Debug, Clone)]
pub struct SceneDef {
    pub name: &'static str,
    /// Per-vertex positions, uploaded once and never mutated
    pub positions: Vec<[f32; 3]>,
    /// Optional per-vertex RGB colors, index-aligned with `positions`
    pub colors: Option<Vec<[f32; 3]>>,
    /// Draw groups in draw order
    pub groups: Vec<DrawGroup>,
    pub camera: CameraPath,
    pub projection: ProjectionParams,
    /// Background clear color
    pub clear_color: [f64; 4],
    /// Whether a depth buffer is cleared and tested
    pub depth_test: bool,
}

/// Validation error found in a scene
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Scene has no draw groups
    NoGroups,
    /// Draw group range is empty or reversed
    EmptyRange(Range<u32>),
    /// Draw group range reads past the uploaded vertex count
    RangeOutOfBounds { range: Range<u32>, vertex_count: u32 },
    /// Two draw groups overlap
    OverlappingRanges(Range<u32>, Range<u32>),
    /// Ranges leave part of the vertex buffer undrawn
    IncompleteCoverage { covered: u32, vertex_count: u32 },
    /// Color buffer length does not match the vertex buffer
    ColorCountMismatch { positions: usize, colors: usize },
    /// A group wants per-vertex colors but the scene has no color buffer
    MissingColorBuffer,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoGroups => write!(f, "Scene has no draw groups"),
            ValidationError::EmptyRange(r) => {
                write!(f, "Draw range {}..{} is empty", r.start, r.end)
            }
            ValidationError::RangeOutOfBounds { range, vertex_count } => write!(
                f,
                "Draw range {}..{} exceeds vertex count {}",
                range.start, range.end, vertex_count
            ),
            ValidationError::OverlappingRanges(a, b) => write!(
                f,
                "Draw ranges {}..{} and {}..{} overlap",
                a.start, a.end, b.start, b.end
            ),
            ValidationError::IncompleteCoverage { covered, vertex_count } => write!(
                f,
                "Draw ranges cover {} of {} vertices",
                covered, vertex_count
            ),
            ValidationError::ColorCountMismatch { positions, colors } => write!(
                f,
                "Color buffer has {} entries for {} vertices",
                colors, positions
            ),
            ValidationError::MissingColorBuffer => {
                write!(f, "A draw group uses vertex colors but the scene has none")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl SceneDef {
    /// Number of uploaded vertices
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Validate the scene, returning all errors found
    ///
    /// Checks that draw ranges are non-empty, in-bounds, pairwise disjoint,
    /// and together cover the whole vertex buffer, and that a color buffer
    /// exists and lines up 1:1 when any group asks for vertex colors.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let vertex_count = self.vertex_count();

        if self.groups.is_empty() {
            errors.push(ValidationError::NoGroups);
        }

        for group in &self.groups {
            if group.range.start >= group.range.end {
                errors.push(ValidationError::EmptyRange(group.range.clone()));
            } else if group.range.end > vertex_count {
                errors.push(ValidationError::RangeOutOfBounds {
                    range: group.range.clone(),
                    vertex_count,
                });
            }
        }

        // Overlap and coverage over the in-bounds ranges
        let mut ranges: Vec<Range<u32>> = self
            .groups
            .iter()
            .map(|g| g.range.clone())
            .filter(|r| r.start < r.end && r.end <= vertex_count)
            .collect();
        ranges.sort_by_key(|r| r.start);

        let mut covered = 0u32;
        let mut prev: Option<Range<u32>> = None;
        for range in ranges {
            if let Some(p) = &prev {
                if range.start < p.end {
                    errors.push(ValidationError::OverlappingRanges(p.clone(), range.clone()));
                    continue;
                }
            }
            covered += range.end - range.start;
            prev = Some(range);
        }

        if errors.is_empty() && covered != vertex_count {
            errors.push(ValidationError::IncompleteCoverage {
                covered,
                vertex_count,
            });
        }

        if let Some(colors) = &self.colors {
            if colors.len() != self.positions.len() {
                errors.push(ValidationError::ColorCountMismatch {
                    positions: self.positions.len(),
                    colors: colors.len(),
                });
            }
        } else if self
            .groups
            .iter()
            .any(|g| g.shading == Shading::VertexColor)
        {
            errors.push(ValidationError::MissingColorBuffer);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(range: Range<u32>) -> DrawGroup {
        DrawGroup {
            shading: Shading::Flat([1.0, 0.0, 0.0, 1.0]),
            range,
        }
    }

    fn scene_with(positions: usize, groups: Vec<DrawGroup>) -> SceneDef {
        SceneDef {
            name: "test",
            positions: vec![[0.0, 0.0, 0.0]; positions],
            colors: None,
            groups,
            camera: CameraPath::Fixed,
            projection: ProjectionParams {
                fov_y_deg: 45.0,
                aspect: 16.0 / 9.0,
                near: 0.1,
                far: 100.0,
            },
            clear_color: [1.0, 1.0, 1.0, 1.0],
            depth_test: false,
        }
    }

    #[test]
    fn test_disjoint_covering_ranges_pass() {
        let scene = scene_with(6, vec![flat(0..3), flat(3..6)]);
        assert!(scene.validate().is_empty());
    }

    #[test]
    fn test_range_out_of_bounds_rejected() {
        // The original second draw call read 3..9 out of a 6-vertex buffer;
        // that overrun must be flagged here.
        let scene = scene_with(6, vec![flat(0..3), flat(3..9)]);
        let errors = scene.validate();
        assert!(errors.contains(&ValidationError::RangeOutOfBounds {
            range: 3..9,
            vertex_count: 6,
        }));
    }

    #[test]
    fn test_overlapping_ranges_rejected() {
        let scene = scene_with(6, vec![flat(0..4), flat(3..6)]);
        let errors = scene.validate();
        assert!(matches!(
            errors[0],
            ValidationError::OverlappingRanges(_, _)
        ));
    }

    #[test]
    fn test_gap_rejected() {
        let scene = scene_with(9, vec![flat(0..3), flat(6..9)]);
        let errors = scene.validate();
        assert!(errors.contains(&ValidationError::IncompleteCoverage {
            covered: 6,
            vertex_count: 9,
        }));
    }

    #[test]
    fn test_no_groups_rejected() {
        let scene = scene_with(6, vec![]);
        let errors = scene.validate();
        assert!(errors.contains(&ValidationError::NoGroups));
    }

    #[test]
    fn test_empty_range_rejected() {
        let scene = scene_with(6, vec![flat(0..6), flat(3..3)]);
        let errors = scene.validate();
        assert!(errors.contains(&ValidationError::EmptyRange(3..3)));
    }

    #[test]
    fn test_vertex_colors_require_color_buffer() {
        let mut scene = scene_with(3, vec![]);
        scene.groups = vec![DrawGroup {
            shading: Shading::VertexColor,
            range: 0..3,
        }];
        let errors = scene.validate();
        assert!(errors.contains(&ValidationError::MissingColorBuffer));
    }

    #[test]
    fn test_color_count_mismatch_rejected() {
        let mut scene = scene_with(3, vec![flat(0..3)]);
        scene.colors = Some(vec![[1.0, 0.0, 0.0]; 2]);
        let errors = scene.validate();
        assert!(errors.contains(&ValidationError::ColorCountMismatch {
            positions: 3,
            colors: 2,
        }));
    }

    #[test]
    fn test_projection_matrix_stable() {
        let params = ProjectionParams {
            fov_y_deg: 45.0,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 100.0,
        };
        assert_eq!(params.matrix(), params.matrix());
    }
}
