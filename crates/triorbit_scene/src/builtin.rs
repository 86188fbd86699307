//! Built-in scenes
//!
//! Three fixed scenes, looked up by name from configuration:
//!
//! - `duo-static`: two flat-colored triangles drawn as uploaded, no camera
//! - `duo-orbit`: the same two triangles under a circular camera orbit
//! - `gem-orbit`: a vertex-colored six-face bipyramid under a Lissajous
//!   orbit with depth testing

use crate::path::{CameraPath, OrbitPath};
use crate::scene::{DrawGroup, ProjectionParams, SceneDef, Shading};

/// Flat color of the first triangle group
const GROUP_A_COLOR: [f32; 4] = [0.8, 0.1, 0.1, 1.0];
/// Flat color of the second triangle group
const GROUP_B_COLOR: [f32; 4] = [0.1, 0.2, 0.8, 1.0];

/// Two disjoint triangles in the z=0 plane
const DUO_POSITIONS: [[f32; 3]; 6] = [
    [0.0, 0.5, 0.0],
    [0.5, -0.5, 0.0],
    [-0.5, -0.5, 0.0],
    [0.0, -0.7, 0.0],
    [-0.5, 0.3, 0.0],
    [0.5, 0.3, 0.0],
];

/// Six triangular faces of a bipyramid: three around the top apex
/// (0, 0.5, 0), three around the bottom apex (0, -0.5, 0)
const GEM_POSITIONS: [[f32; 3]; 18] = [
    [0.0, 0.5, 0.0],
    [0.5, 0.0, 0.3],
    [-0.5, 0.0, 0.3],
    [0.0, 0.5, 0.0],
    [0.5, 0.0, 0.3],
    [0.0, 0.0, -0.5],
    [0.0, 0.5, 0.0],
    [0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.3],
    [0.0, -0.5, 0.0],
    [0.5, 0.0, 0.3],
    [-0.5, 0.0, 0.3],
    [0.0, -0.5, 0.0],
    [0.5, 0.0, 0.3],
    [0.0, 0.0, -0.5],
    [0.0, -0.5, 0.0],
    [0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.3],
];

/// Per-vertex RGB for the bipyramid, index-aligned with [`GEM_POSITIONS`]
const GEM_COLORS: [[f32; 3]; 18] = [
    [0.9, 0.0, 0.9],
    [0.9, 0.0, 0.0],
    [0.0, 0.0, 0.9],
    [0.9, 0.0, 0.9],
    [0.0, 0.0, 0.9],
    [0.9, 0.0, 0.0],
    [0.9, 0.0, 0.9],
    [0.9, 0.0, 0.0],
    [0.0, 0.0, 0.9],
    [0.9, 0.0, 0.9],
    [0.0, 0.0, 0.9],
    [0.9, 0.0, 0.0],
    [0.9, 0.0, 0.9],
    [0.9, 0.0, 0.0],
    [0.0, 0.0, 0.9],
    [0.9, 0.0, 0.9],
    [0.0, 0.0, 0.9],
    [0.9, 0.0, 0.0],
];

const WIDE_PROJECTION: ProjectionParams = ProjectionParams {
    fov_y_deg: 45.0,
    aspect: 16.0 / 9.0,
    near: 0.1,
    far: 100.0,
};

const CLASSIC_PROJECTION: ProjectionParams = ProjectionParams {
    fov_y_deg: 45.0,
    aspect: 4.0 / 3.0,
    near: 0.1,
    far: 100.0,
};

fn duo_groups() -> Vec<DrawGroup> {
    vec![
        DrawGroup {
            shading: Shading::Flat(GROUP_A_COLOR),
            range: 0..3,
        },
        DrawGroup {
            shading: Shading::Flat(GROUP_B_COLOR),
            range: 3..6,
        },
    ]
}

/// Two triangles drawn exactly as uploaded, white background
pub fn duo_static() -> SceneDef {
    SceneDef {
        name: "duo-static",
        positions: DUO_POSITIONS.to_vec(),
        colors: None,
        groups: duo_groups(),
        camera: CameraPath::Fixed,
        projection: WIDE_PROJECTION,
        clear_color: [1.0, 1.0, 1.0, 1.0],
        depth_test: false,
    }
}

/// The same two triangles under a circular camera orbit of radius 4
pub fn duo_orbit() -> SceneDef {
    SceneDef {
        name: "duo-orbit",
        positions: DUO_POSITIONS.to_vec(),
        colors: None,
        groups: duo_groups(),
        camera: CameraPath::Orbit(OrbitPath::circular(4.0)),
        projection: WIDE_PROJECTION,
        clear_color: [1.0, 1.0, 1.0, 1.0],
        depth_test: false,
    }
}

/// Vertex-colored bipyramid under a (3, 2, 1) Lissajous orbit of radius 3
pub fn gem_orbit() -> SceneDef {
    SceneDef {
        name: "gem-orbit",
        positions: GEM_POSITIONS.to_vec(),
        colors: Some(GEM_COLORS.to_vec()),
        groups: vec![DrawGroup {
            shading: Shading::VertexColor,
            range: 0..18,
        }],
        camera: CameraPath::Orbit(OrbitPath {
            radius: 3.0,
            freq: [3.0, 2.0, 1.0],
        }),
        projection: CLASSIC_PROJECTION,
        clear_color: [0.9, 0.9, 1.0, 1.0],
        depth_test: true,
    }
}

/// Look up a built-in scene by name
pub fn by_name(name: &str) -> Option<SceneDef> {
    match name {
        "duo-static" => Some(duo_static()),
        "duo-orbit" => Some(duo_orbit()),
        "gem-orbit" => Some(gem_orbit()),
        _ => None,
    }
}

/// Names of all built-in scenes, for error messages
pub fn names() -> &'static [&'static str] {
    &["duo-static", "duo-orbit", "gem-orbit"]
}
