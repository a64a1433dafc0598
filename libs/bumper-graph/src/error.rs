//! # Graph Errors
//!
//! Contract violations detected while building or posing a [`crate::BumperGraph`].
//! These are structural bugs in the caller's data, never per-frame conditions.

use thiserror::Error;

/// Errors that can occur while constructing or mutating a bumper graph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// A bumper's shape does not match the spheres it references
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// A bumper references a sphere that does not exist
    #[error("Bumper {bumper} references sphere {index}, but the graph has {sphere_count} spheres")]
    SphereIndexOutOfRange {
        bumper: usize,
        index: usize,
        sphere_count: usize,
    },

    /// A pose update addresses a sphere that does not exist
    #[error("Sphere {index} does not exist, the graph has {sphere_count} spheres")]
    NoSuchSphere { index: usize, sphere_count: usize },

    /// A sphere has a non-finite center or an unusable radius
    #[error("Invalid sphere {index}: {message}")]
    InvalidSphere { index: usize, message: String },

    /// A pose update does not cover exactly the spheres of the graph
    #[error("Pose has {actual} spheres, graph expects {expected}")]
    PoseMismatch { expected: usize, actual: usize },
}

impl GraphError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates an invalid sphere error.
    pub fn invalid_sphere(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidSphere {
            index,
            message: message.into(),
        }
    }
}
