//! The [`Body`] data model and the ordered [`BodyList`].

use crate::layout::pack;

/// A point mass: identity, gravitational parameter, and initial
/// conditions. Immutable once constructed.
///
/// `mu` is the gravitational parameter (mass times the gravitational
/// constant, units length³/time²); the kernels never see raw masses.
/// All bodies placed in one [`BodyList`] must share a single consistent
/// unit system.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    name: String,
    mu: f64,
    r0: [f64; 3],
    v0: [f64; 3],
}

impl Body {
    /// Create a body from its gravitational parameter and initial
    /// position/velocity.
    pub fn new(name: impl Into<String>, mu: f64, r0: [f64; 3], v0: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            mu,
            r0,
            v0,
        }
    }

    /// Human-readable identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gravitational parameter, length³/time².
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Initial position.
    pub fn r0(&self) -> [f64; 3] {
        self.r0
    }

    /// Initial velocity.
    pub fn v0(&self) -> [f64; 3] {
        self.v0
    }
}

/// An ordered sequence of bodies.
///
/// The order is significant: body `i` here is body `i` in every state
/// vector, `mu` vector, and trajectory derived from this list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyList {
    bodies: Vec<Body>,
}

impl BodyList {
    /// Wrap an ordered collection of bodies.
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when the list holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Body at index `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    /// Iterate over the bodies in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    /// Gravitational parameters in index order, as the kernels expect.
    pub fn mu_vec(&self) -> Vec<f64> {
        self.bodies.iter().map(Body::mu).collect()
    }

    /// The blocked initial state vector at `t0`.
    pub fn initial_state(&self) -> Vec<f64> {
        let r: Vec<[f64; 3]> = self.bodies.iter().map(Body::r0).collect();
        let v: Vec<[f64; 3]> = self.bodies.iter().map(Body::v0).collect();
        pack(&r, &v)
    }
}

impl From<Vec<Body>> for BodyList {
    fn from(bodies: Vec<Body>) -> Self {
        Self::new(bodies)
    }
}

impl FromIterator<Body> for BodyList {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BodyList {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
