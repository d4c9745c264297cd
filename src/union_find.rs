//! Disjoint-set (union-find) structures over the elements `0..n`.
//!
//! All variants keep their components in plain arrays and never compress paths.

use crate::error::UnionFindError;

/// A disjoint-set structure over the elements `0..len()`
pub trait UnionFind: Sized {
    /// Create `n` singleton components
    fn new(n: usize) -> Self;

    /// The number of elements
    fn len(&self) -> usize;

    /// Whether there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of components
    fn count(&self) -> usize;

    /// The identifier of the component containing `p`
    fn find(&self, p: usize) -> Result<usize, UnionFindError>;

    /// Join the components of `p` and `q`, doing nothing if they are already connected
    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError>;

    /// Whether `p` and `q` are in the same component
    fn connected(&self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(p)? == self.find(q)?)
    }
}

fn validate(p: usize, len: usize) -> Result<(), UnionFindError> {
    if p < len {
        Ok(())
    } else {
        Err(UnionFindError::OutOfBounds { index: p, len })
    }
}

/// Walk the parent links from `p` up to its root
fn root(parents: &[usize], mut p: usize) -> Result<usize, UnionFindError> {
    validate(p, parents.len())?;
    while p != parents[p] {
        p = parents[p];
    }
    Ok(p)
}

/// Every element stores the id of its component. [`UnionFind::find`] is constant time,
/// [`UnionFind::union`] relabels a whole component and takes linear time.
#[derive(Debug, Clone)]
pub struct QuickFind {
    ids: Box<[usize]>,
    count: usize,
}

impl UnionFind for QuickFind {
    fn new(n: usize) -> Self {
        Self {
            ids: (0..n).collect(),
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> Result<usize, UnionFindError> {
        validate(p, self.ids.len())?;
        Ok(self.ids[p])
    }

    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
        let p_id = self.find(p)?;
        let q_id = self.find(q)?;
        if p_id == q_id {
            return Ok(());
        }

        for id in self.ids.iter_mut().filter(|id| **id == p_id) {
            *id = q_id;
        }
        self.count -= 1;

        Ok(())
    }
}

impl std::fmt::Display for QuickFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.ids)
    }
}

/// Every element stores its parent in a forest, the roots identify the components.
/// Trees may degenerate into lists, so both operations take linear time in the worst case.
#[derive(Debug, Clone)]
pub struct QuickUnion {
    parents: Box<[usize]>,
    count: usize,
}

impl UnionFind for QuickUnion {
    fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> Result<usize, UnionFindError> {
        root(&self.parents, p)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
        let p_root = self.find(p)?;
        let q_root = self.find(q)?;
        if p_root == q_root {
            return Ok(());
        }

        self.parents[p_root] = q_root;
        self.count -= 1;

        Ok(())
    }
}

impl std::fmt::Display for QuickUnion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.parents)
    }
}

/// Like [`QuickUnion`] but always hangs the smaller tree below the root of the larger one,
/// which keeps the height of every tree logarithmic.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parents: Box<[usize]>,
    sizes: Box<[usize]>,
    count: usize,
}

impl WeightedQuickUnion {
    /// The number of elements in the component of `p`
    pub fn size(&self, p: usize) -> Result<usize, UnionFindError> {
        let p_root = self.find(p)?;
        Ok(self.sizes[p_root])
    }
}

impl UnionFind for WeightedQuickUnion {
    fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            sizes: std::iter::repeat_n(1, n).collect(),
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> Result<usize, UnionFindError> {
        root(&self.parents, p)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError> {
        let p_root = self.find(p)?;
        let q_root = self.find(q)?;
        if p_root == q_root {
            return Ok(());
        }

        let (small, large) = if self.sizes[p_root] < self.sizes[q_root] {
            (p_root, q_root)
        } else {
            (q_root, p_root)
        };
        self.parents[small] = large;
        self.sizes[large] += self.sizes[small];
        self.count -= 1;

        Ok(())
    }
}

impl std::fmt::Display for WeightedQuickUnion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Array: {:?}", self.parents)?;
        write!(f, "Sizes: {:?}", self.sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_basics<U: UnionFind>() {
        let mut union_find = U::new(10);
        assert_eq!(union_find.len(), 10);
        assert_eq!(union_find.count(), 10);
        assert!(!union_find.connected(2, 5).unwrap());

        union_find.union(2, 5).unwrap();
        assert_eq!(union_find.count(), 9);
        union_find.union(5, 7).unwrap();
        assert_eq!(union_find.count(), 8);

        assert_eq!(union_find.find(2), union_find.find(7));
        assert!(union_find.connected(7, 2).unwrap());
        assert!(!union_find.connected(7, 3).unwrap());

        // Already connected
        union_find.union(2, 7).unwrap();
        assert_eq!(union_find.count(), 8);

        union_find.union(0, 1).unwrap();
        union_find.union(1, 7).unwrap();
        assert_eq!(union_find.count(), 6);
        assert!(union_find.connected(0, 5).unwrap());
    }

    fn check_out_of_bounds<U: UnionFind>() {
        let mut union_find = U::new(10);
        let error = UnionFindError::OutOfBounds { index: 15, len: 10 };

        assert_eq!(union_find.find(15), Err(error));
        assert_eq!(union_find.connected(1, 15), Err(error));
        assert_eq!(union_find.union(15, 1), Err(error));
        assert_eq!(union_find.count(), 10);

        let empty = U::new(0);
        assert!(empty.is_empty());
        assert!(empty.find(0).is_err());
    }

    fn check_chain<U: UnionFind>() {
        let mut union_find = U::new(1000);
        for i in 1..1000 {
            union_find.union(i - 1, i).unwrap();
        }
        assert_eq!(union_find.count(), 1);
        assert!(union_find.connected(0, 999).unwrap());
    }

    #[test]
    fn quick_find() {
        check_basics::<QuickFind>();
        check_out_of_bounds::<QuickFind>();
        check_chain::<QuickFind>();
    }

    #[test]
    fn quick_union() {
        check_basics::<QuickUnion>();
        check_out_of_bounds::<QuickUnion>();
        check_chain::<QuickUnion>();
    }

    #[test]
    fn weighted_quick_union() {
        check_basics::<WeightedQuickUnion>();
        check_out_of_bounds::<WeightedQuickUnion>();
        check_chain::<WeightedQuickUnion>();
    }

    #[test]
    fn representations() {
        let mut quick_find = QuickFind::new(11);
        let mut quick_union = QuickUnion::new(11);
        for (p, q) in [(2, 5), (5, 7), (7, 10)] {
            quick_find.union(p, q).unwrap();
            quick_union.union(p, q).unwrap();
        }

        assert_eq!(quick_find.to_string(), "[0, 1, 10, 3, 4, 10, 6, 10, 8, 9, 10]");
        assert_eq!(quick_union.to_string(), "[0, 1, 5, 3, 4, 7, 6, 10, 8, 9, 10]");
    }

    #[test]
    fn weighted() {
        let mut union_find = WeightedQuickUnion::new(11);
        union_find.union(2, 7).unwrap();
        union_find.union(7, 8).unwrap();
        union_find.union(3, 10).unwrap();
        union_find.union(3, 2).unwrap();

        // The smaller tree {3, 10} hangs below the root of {2, 7, 8}
        assert_eq!(union_find.find(10), Ok(2));
        assert_eq!(union_find.size(10), Ok(5));
        assert_eq!(
            union_find.to_string(),
            "Array: [0, 1, 2, 2, 4, 5, 6, 2, 2, 9, 3]\nSizes: [1, 1, 5, 2, 1, 1, 1, 1, 1, 1, 1]"
        );
    }
}
