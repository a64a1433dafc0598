//! # Bumpers
//!
//! Convex proxy shapes over 2, 3 or 4 spheres.
//!
//! The sphere count is part of the variant, so a prysmoid can never carry
//! four indices. Serialized data goes through a tagged form
//! (`{"shape": "quad", "spheres": [0, 1, 2, 3]}`) whose conversion rejects
//! any count mismatch.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// The shape family of a bumper.
///
/// Also the unit of draw batching: the mesh builders emit one index range per
/// shape type, in [`ShapeType::BUILD_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    /// Two-sphere capsule body.
    Capsuloid,
    /// Three-sphere wedge.
    Prysmoid,
    /// Four-sphere wedge.
    Quad,
}

impl ShapeType {
    /// Order in which shape groups are built and batched.
    pub const BUILD_ORDER: [ShapeType; 3] =
        [ShapeType::Prysmoid, ShapeType::Quad, ShapeType::Capsuloid];

    /// Number of spheres a bumper of this shape references.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bumper_graph::ShapeType;
    /// assert_eq!(ShapeType::Capsuloid.sphere_count(), 2);
    /// assert_eq!(ShapeType::Prysmoid.sphere_count(), 3);
    /// assert_eq!(ShapeType::Quad.sphere_count(), 4);
    /// ```
    pub const fn sphere_count(self) -> usize {
        match self {
            ShapeType::Capsuloid => 2,
            ShapeType::Prysmoid => 3,
            ShapeType::Quad => 4,
        }
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShapeType::Capsuloid => "capsuloid",
            ShapeType::Prysmoid => "prysmoid",
            ShapeType::Quad => "quad",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A bumper: a shape over a fixed number of sphere indices.
///
/// # Example
///
/// ```rust
/// use bumper_graph::{Bumper, ShapeType};
///
/// let bumper = Bumper::Prysmoid([0, 1, 2]);
/// assert_eq!(bumper.shape_type(), ShapeType::Prysmoid);
/// assert_eq!(bumper.sphere_indices(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TaggedBumper", into = "TaggedBumper")]
pub enum Bumper {
    Capsuloid([usize; 2]),
    Prysmoid([usize; 3]),
    Quad([usize; 4]),
}

impl Bumper {
    /// Builds a bumper from a shape tag and a flat index list.
    ///
    /// Fails with [`GraphError::InvalidTopology`] when the list length does
    /// not match the shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bumper_graph::{Bumper, ShapeType};
    ///
    /// assert!(Bumper::from_indices(ShapeType::Quad, &[0, 1, 2, 3]).is_ok());
    /// assert!(Bumper::from_indices(ShapeType::Quad, &[0, 1, 2]).is_err());
    /// ```
    pub fn from_indices(shape: ShapeType, indices: &[usize]) -> Result<Self, GraphError> {
        let mismatch = || {
            GraphError::invalid_topology(format!(
                "{shape} bumper needs {} spheres, got {}",
                shape.sphere_count(),
                indices.len()
            ))
        };
        match shape {
            ShapeType::Capsuloid => indices.try_into().map(Bumper::Capsuloid),
            ShapeType::Prysmoid => indices.try_into().map(Bumper::Prysmoid),
            ShapeType::Quad => indices.try_into().map(Bumper::Quad),
        }
        .map_err(|_| mismatch())
    }

    /// Returns the shape family.
    pub const fn shape_type(&self) -> ShapeType {
        match self {
            Bumper::Capsuloid(_) => ShapeType::Capsuloid,
            Bumper::Prysmoid(_) => ShapeType::Prysmoid,
            Bumper::Quad(_) => ShapeType::Quad,
        }
    }

    /// Returns the referenced sphere indices in bumper order.
    pub fn sphere_indices(&self) -> &[usize] {
        match self {
            Bumper::Capsuloid(indices) => indices,
            Bumper::Prysmoid(indices) => indices,
            Bumper::Quad(indices) => indices,
        }
    }

    /// Returns the consecutive sphere pairs joined by lateral frustums.
    ///
    /// Prysmoids and quads close the loop back to their first sphere; a
    /// capsuloid has exactly one pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bumper_graph::Bumper;
    ///
    /// let pairs: Vec<_> = Bumper::Prysmoid([4, 5, 6]).edges().collect();
    /// assert_eq!(pairs, vec![(4, 5), (5, 6), (6, 4)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let indices = self.sphere_indices();
        let edge_count = match self {
            Bumper::Capsuloid(_) => 1,
            _ => indices.len(),
        };
        (0..edge_count).map(move |i| (indices[i], indices[(i + 1) % indices.len()]))
    }
}

/// Serialized form of a [`Bumper`]: a shape tag plus a flat index list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaggedBumper {
    shape: ShapeType,
    spheres: Vec<usize>,
}

impl TryFrom<TaggedBumper> for Bumper {
    type Error = GraphError;

    fn try_from(tagged: TaggedBumper) -> Result<Self, Self::Error> {
        Bumper::from_indices(tagged.shape, &tagged.spheres)
    }
}

impl From<Bumper> for TaggedBumper {
    fn from(bumper: Bumper) -> Self {
        Self {
            shape: bumper.shape_type(),
            spheres: bumper.sphere_indices().to_vec(),
        }
    }
}
