use descent_core::VectorSpace;

/// Ordered set of search directions, oldest first.
#[derive(Debug, Clone)]
pub(super) struct Directions<V> {
    vectors: Vec<V>,
}

impl<V: VectorSpace> Directions<V> {
    /// Creates the coordinate basis for vectors shaped like `like`.
    pub(super) fn basis(like: &V) -> Self {
        Self {
            vectors: (0..like.dimension()).map(|i| like.basis(i)).collect(),
        }
    }

    /// Replaces every direction with the coordinate basis.
    pub(super) fn reset(&mut self, like: &V) {
        *self = Self::basis(like);
    }

    /// Discards the oldest direction and appends `newest`.
    pub(super) fn replace_oldest(&mut self, newest: V) {
        if !self.vectors.is_empty() {
            self.vectors.remove(0);
        }
        self.vectors.push(newest);
    }

    pub(super) fn iter_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.vectors.iter_mut()
    }
}
