//! WASM-facing entry points for the bumper mesh pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The renderer loads a graph once, then per frame pushes the
//! new sphere pose, calls `update` and uploads the typed buffers. Native tests
//! go through the `*_internal` methods, which keep Rust error types.
//!
//! ```
//! use bumper_wasm::BumperScene;
//!
//! let json = r#"{
//!     "spheres": [
//!         { "center": [0.0, 0.0, 0.0], "radius": 1.0 },
//!         { "center": [3.0, 0.0, 0.0], "radius": 1.0 }
//!     ],
//!     "bumpers": [{ "shape": "capsuloid", "spheres": [0, 1] }]
//! }"#;
//! let scene = BumperScene::from_json_internal(json).unwrap();
//! assert_eq!(scene.triangle_count(), 64);
//! ```

use std::cell::OnceCell;

use bumper_graph::{BumperGraph, GraphError, Sphere};
use bumper_mesh::impostor::{impostors_f32, sphere_impostors};
use bumper_mesh::{BumperMeshAssembler, ImpostorQuad, MeshError, RebuildReport};
use config::constants::FRUSTUM_SEGMENTS;
use glam::DVec3;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "bumper-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` records to the browser console. Calling it twice is harmless.
#[wasm_bindgen]
pub fn init_logging() {
    install_console_logger();
}

#[cfg(target_arch = "wasm32")]
fn install_console_logger() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install_console_logger() {}

/// Returns the radial segment count of every frustum ring.
///
/// # Examples
/// ```
/// assert!(bumper_wasm::default_segments() >= 3);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    FRUSTUM_SEGMENTS
}

/// Errors surfaced by [`BumperScene`].
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// A posed bumper graph and the mesh built from it.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const scene = BumperScene.from_json(json);
///
/// // per frame
/// scene.set_sphere(3, x, y, z, r);
/// scene.update();
///
/// const vertices = scene.vertices();   // Float32Array, stride 6
/// const indices = scene.indices();     // Uint32Array
/// const offsets = scene.submesh_offsets();
/// const counts = scene.submesh_counts();
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct BumperScene {
    graph: BumperGraph,
    assembler: BumperMeshAssembler,
    impostor_quad: OnceCell<ImpostorQuad>,
}

#[wasm_bindgen]
impl BumperScene {
    /// Parses a graph and builds its first mesh.
    ///
    /// # Errors
    /// Returns a JavaScript error string when the JSON is malformed, the
    /// topology is invalid or the mesh exceeds the vertex budget.
    pub fn from_json(json: &str) -> Result<BumperScene, JsValue> {
        Ok(Self::from_json_internal(json)?)
    }

    /// Moves or resizes one sphere. Takes effect on the next `update`.
    pub fn set_sphere(&mut self, index: usize, x: f64, y: f64, z: f64, radius: f64) -> Result<(), JsValue> {
        Ok(self.set_sphere_internal(index, x, y, z, radius)?)
    }

    /// Rebuilds the mesh from the current pose.
    pub fn update(&mut self) -> Result<(), JsValue> {
        self.update_internal()?;
        Ok(())
    }

    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.assembler.buffers().vertex_count() as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.assembler.buffers().triangle_count() as u32
    }

    /// Returns the number of spheres.
    #[wasm_bindgen(getter)]
    pub fn sphere_count(&self) -> u32 {
        self.graph.sphere_count() as u32
    }

    /// Interleaved vertices as a Float32Array.
    ///
    /// Format: [px, py, pz, nx, ny, nz, ...]
    pub fn vertices(&self) -> Vec<f32> {
        self.assembler.buffers().vertices_f32()
    }

    /// Triangle indices as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.assembler.buffers().indices().to_vec()
    }

    /// First index of each submesh, in prysmoid, quad, capsuloid order.
    pub fn submesh_offsets(&self) -> Vec<u32> {
        self.assembler
            .buffers()
            .submeshes()
            .iter()
            .map(|s| s.index_offset as u32)
            .collect()
    }

    /// Index count of each submesh.
    pub fn submesh_counts(&self) -> Vec<u32> {
        self.assembler
            .buffers()
            .submeshes()
            .iter()
            .map(|s| s.index_count as u32)
            .collect()
    }

    /// RGB color of each submesh, flattened.
    pub fn submesh_colors(&self) -> Vec<f32> {
        self.assembler
            .buffers()
            .submeshes()
            .iter()
            .flat_map(|s| s.color)
            .collect()
    }

    /// Mean sphere center as `[x, y, z]`, empty for a graph without spheres.
    pub fn centroid(&self) -> Vec<f32> {
        self.graph
            .centroid()
            .map(|c| vec![c.x as f32, c.y as f32, c.z as f32])
            .unwrap_or_default()
    }

    /// One `[cx, cy, cz, r]` quadruple per sphere.
    pub fn sphere_impostors(&self) -> Vec<f32> {
        let color = self.assembler.config().palette.sphere;
        impostors_f32(&sphere_impostors(&self.graph, color))
    }

    /// Corners of the shared impostor quad as `[x, y]` pairs.
    pub fn impostor_quad_vertices(&self) -> Vec<f32> {
        self.impostor_quad().corners_f32()
    }

    /// Triangle indices of the shared impostor quad.
    pub fn impostor_quad_indices(&self) -> Vec<u32> {
        self.impostor_quad().indices.to_vec()
    }

    /// Number of geometry issues recorded by the last rebuild.
    pub fn issue_count(&self) -> u32 {
        self.assembler.report().issues.len() as u32
    }

    /// Serializes the current graph and pose.
    pub fn to_json(&self) -> Result<String, JsValue> {
        Ok(self.to_json_internal()?)
    }
}

impl BumperScene {
    /// Wraps a graph and builds its first mesh with default settings.
    pub fn new(graph: BumperGraph) -> Result<Self, SceneError> {
        let mut scene = Self {
            graph,
            assembler: BumperMeshAssembler::default(),
            impostor_quad: OnceCell::new(),
        };
        scene.update_internal()?;
        Ok(scene)
    }

    /// Host-side `from_json`.
    pub fn from_json_internal(json: &str) -> Result<Self, SceneError> {
        let graph: BumperGraph = serde_json::from_str(json)?;
        Self::new(graph)
    }

    /// Host-side `set_sphere`.
    pub fn set_sphere_internal(
        &mut self,
        index: usize,
        x: f64,
        y: f64,
        z: f64,
        radius: f64,
    ) -> Result<(), SceneError> {
        self.graph.set_sphere(index, Sphere::new(DVec3::new(x, y, z), radius))?;
        Ok(())
    }

    /// Host-side `update`, returning the rebuild report.
    pub fn update_internal(&mut self) -> Result<&RebuildReport, SceneError> {
        Ok(self.assembler.update(&self.graph)?)
    }

    /// Host-side `to_json`.
    pub fn to_json_internal(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(&self.graph)?)
    }

    /// Returns the graph.
    pub fn graph(&self) -> &BumperGraph {
        &self.graph
    }

    /// Returns the assembler holding the last mesh.
    pub fn assembler(&self) -> &BumperMeshAssembler {
        &self.assembler
    }

    /// Returns the shared impostor quad, building it on first access.
    pub fn impostor_quad(&self) -> &ImpostorQuad {
        self.impostor_quad.get_or_init(ImpostorQuad::new)
    }
}

#[cfg(test)]
mod tests;
