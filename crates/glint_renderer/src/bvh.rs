//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! A binary tree over the scene's primitives, split at the midpoint of the
//! centroid extent on its longest axis. Leaves are indices into the
//! primitive slice the tree was built from, so the same slice must be passed
//! back in when traversing.

use crate::{Bounds3, HitRecord, Hittable, Primitive, Ray};

/// BVH node - an interior node with one or two children, or the empty tree.
#[derive(Debug, Clone, PartialEq)]
pub enum BvhNode {
    /// Tree over zero primitives. Every ray misses.
    Empty,
    /// Node with a box around everything below it. A node over a single
    /// primitive has only a left child.
    Interior {
        bbox: Bounds3,
        left: BvhChild,
        right: Option<BvhChild>,
    },
}

/// Child slot of an interior node.
#[derive(Debug, Clone, PartialEq)]
pub enum BvhChild {
    Node(Box<BvhNode>),
    /// Index into the primitive slice.
    Primitive(usize),
}

impl BvhNode {
    /// Build a BVH over `primitives`.
    pub fn build(primitives: &[Primitive]) -> Self {
        if primitives.is_empty() {
            return BvhNode::Empty;
        }

        let mut indices: Vec<usize> = (0..primitives.len()).collect();
        Self::build_recursive(primitives, &mut indices)
    }

    /// Recursive BVH construction over a non-empty index slice.
    fn build_recursive(primitives: &[Primitive], indices: &mut [usize]) -> Self {
        match indices.len() {
            1 => BvhNode::Interior {
                bbox: primitives[indices[0]].bounds(),
                left: BvhChild::Primitive(indices[0]),
                right: None,
            },
            2 => {
                let (a, b) = (indices[0], indices[1]);
                BvhNode::Interior {
                    bbox: primitives[a].bounds().union(&primitives[b].bounds()),
                    left: BvhChild::Primitive(a),
                    right: Some(BvhChild::Primitive(b)),
                }
            }
            n => {
                // Compute bounding box of all objects
                let bbox = indices
                    .iter()
                    .fold(Bounds3::EMPTY, |acc, &i| acc.union(&primitives[i].bounds()));

                // Choose split axis based on centroid spread
                let centroid_bounds = indices
                    .iter()
                    .fold(Bounds3::EMPTY, |acc, &i| acc.union_point(primitives[i].centroid()));
                let axis = centroid_bounds.longest_axis();
                let split_at = centroid_bounds.axis_interval(axis).midpoint();

                let mut mid = partition(indices, |i| primitives[i].centroid()[axis] < split_at);
                if mid == 0 || mid == n {
                    // Everything landed on one side
                    mid = n / 2;
                }

                let (left, right) = indices.split_at_mut(mid);
                BvhNode::Interior {
                    bbox,
                    left: BvhChild::Node(Box::new(Self::build_recursive(primitives, left))),
                    right: Some(BvhChild::Node(Box::new(Self::build_recursive(
                        primitives, right,
                    )))),
                }
            }
        }
    }

    /// Nearest hit in front of the ray origin.
    pub fn intersect<'a>(&self, primitives: &'a [Primitive], ray: &Ray) -> Option<HitRecord<'a>> {
        self.traverse(primitives, ray, None)
    }

    /// Nearest hit in front of the ray origin, ignoring the exact primitive
    /// instance `excluded`. Used for shadow rays leaving a surface.
    pub fn intersect_excluding<'a>(
        &self,
        primitives: &'a [Primitive],
        ray: &Ray,
        excluded: &Primitive,
    ) -> Option<HitRecord<'a>> {
        self.traverse(primitives, ray, Some(excluded))
    }

    fn traverse<'a>(
        &self,
        primitives: &'a [Primitive],
        ray: &Ray,
        excluded: Option<&Primitive>,
    ) -> Option<HitRecord<'a>> {
        match self {
            BvhNode::Empty => None,
            BvhNode::Interior { bbox, left, right } => {
                if !bbox.hit(ray) {
                    return None;
                }

                let hit_left = left.traverse(primitives, ray, excluded);
                let hit_right = right
                    .as_ref()
                    .and_then(|r| r.traverse(primitives, ray, excluded));

                match (hit_left, hit_right) {
                    (Some(l), Some(r)) => Some(if l.t < r.t { l } else { r }),
                    (l, r) => l.or(r),
                }
            }
        }
    }

    /// Bounding box of the whole tree.
    pub fn bounds(&self) -> Bounds3 {
        match self {
            BvhNode::Empty => Bounds3::EMPTY,
            BvhNode::Interior { bbox, .. } => *bbox,
        }
    }

    /// Number of interior nodes.
    pub fn node_count(&self) -> usize {
        match self {
            BvhNode::Empty => 0,
            BvhNode::Interior { left, right, .. } => {
                1 + left.node_count() + right.as_ref().map_or(0, BvhChild::node_count)
            }
        }
    }

    /// Longest root-to-leaf path, counted in interior nodes.
    pub fn depth(&self) -> usize {
        match self {
            BvhNode::Empty => 0,
            BvhNode::Interior { left, right, .. } => {
                1 + left.depth().max(right.as_ref().map_or(0, BvhChild::depth))
            }
        }
    }
}

impl BvhChild {
    fn traverse<'a>(
        &self,
        primitives: &'a [Primitive],
        ray: &Ray,
        excluded: Option<&Primitive>,
    ) -> Option<HitRecord<'a>> {
        match self {
            BvhChild::Node(node) => node.traverse(primitives, ray, excluded),
            BvhChild::Primitive(i) => {
                let primitive = primitives.get(*i)?;
                if excluded.is_some_and(|e| std::ptr::eq(e, primitive)) {
                    return None;
                }
                // Spheres report roots behind the origin; drop those here
                primitive.intersect(ray).filter(|hit| hit.t > 0.0)
            }
        }
    }

    fn node_count(&self) -> usize {
        match self {
            BvhChild::Node(node) => node.node_count(),
            BvhChild::Primitive(_) => 0,
        }
    }

    fn depth(&self) -> usize {
        match self {
            BvhChild::Node(node) => node.depth(),
            BvhChild::Primitive(_) => 0,
        }
    }
}

/// Reorder `indices` in place so that every element matching `pred` comes
/// first. Returns the number of matching elements. Not stable.
fn partition(indices: &mut [usize], pred: impl Fn(usize) -> bool) -> usize {
    let mut i = 0;
    let mut j = indices.len();

    loop {
        while i < j && pred(indices[i]) {
            i += 1;
        }
        while i < j && !pred(indices[j - 1]) {
            j -= 1;
        }
        if i >= j {
            return i;
        }
        indices.swap(i, j - 1);
        i += 1;
        j -= 1;
    }
}
