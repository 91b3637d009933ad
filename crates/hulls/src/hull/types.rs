//! Hull result and error types.

use std::collections::BTreeSet;
use std::fmt;

use nalgebra::Vector2;

use crate::geom::{turn, Point};

/// Ordered hull boundary, treated as a closed polygon (last vertex connects
/// back to the first).
///
/// Produced only by the algorithms in this module, so every vertex is an input
/// point and no coordinate appears twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    #[inline]
    pub(crate) fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary edges `(v_i, v_{i+1})`, including the closing edge.
    /// Hulls with fewer than two vertices have no edges.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = if self.vertices.len() < 2 {
            0
        } else {
            self.vertices.len()
        };
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Twice the signed shoelace area. Positive for counter-clockwise order in
    /// the mathematical (y-up) sense.
    pub fn twice_area(&self) -> i128 {
        self.edges()
            .map(|(p, q)| {
                i128::from(p.x) * i128::from(q.y) - i128::from(q.x) * i128::from(p.y)
            })
            .sum()
    }

    /// No enclosing polygon: fewer than three vertices or zero area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.twice_area() == 0
    }

    /// Whether `q` lies inside the hull or on its boundary.
    pub fn contains(&self, q: Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => *a == q,
            [a, b] => on_segment(*a, *b, q),
            _ => {
                let s = self.twice_area().signum();
                if s == 0 {
                    return self.edges().any(|(a, b)| on_segment(a, b, q));
                }
                // turn(a, b, q) has the opposite sign of the y-up cross product.
                self.edges().all(|(a, b)| turn(a, b, q) * s <= 0)
            }
        }
    }

    /// Vertices as a set, for order-independent comparisons between algorithms.
    pub fn vertex_set(&self) -> BTreeSet<Point> {
        self.vertices.iter().copied().collect()
    }

    /// Area centroid; `None` for degenerate hulls.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        if self.vertices.len() < 3 {
            return None;
        }
        let mut a: f64 = 0.0;
        let mut cx: f64 = 0.0;
        let mut cy: f64 = 0.0;
        for (p, q) in self.edges() {
            let (p, q) = (p.to_vec2(), q.to_vec2());
            let cross = p.x * q.y - q.x * p.y;
            a += cross;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        a *= 0.5;
        if a == 0.0 {
            return None;
        }
        Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
    }
}

impl IntoIterator for Hull {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

fn on_segment(a: Point, b: Point, q: Point) -> bool {
    turn(a, b, q) == 0
        && q.x >= a.x.min(b.x)
        && q.x <= a.x.max(b.x)
        && q.y >= a.y.min(b.y)
        && q.y <= a.y.max(b.y)
}

/// Why no hull was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than `MIN_HULL_POINTS` points were supplied.
    InsufficientPoints { found: usize },
    /// The selected algorithm is reserved but has no implementation.
    NotImplemented { algorithm: &'static str },
    /// A reset signal (`AlgorithmChoice::Clear`) reached the selector.
    NotAnAlgorithm,
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { found } => write!(
                f,
                "insufficient points: need at least {}, found {found}",
                crate::cfg::MIN_HULL_POINTS
            ),
            Self::NotImplemented { algorithm } => write!(f, "{algorithm} is not implemented"),
            Self::NotAnAlgorithm => write!(f, "clear is a reset signal, not a hull algorithm"),
        }
    }
}

impl std::error::Error for HullError {}
