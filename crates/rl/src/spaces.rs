//! Action and observation space descriptors.

/// Vector of independent discrete choices; component `i` takes values in
/// `0..nvec[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiDiscrete {
    pub nvec: Vec<usize>,
}

impl MultiDiscrete {
    #[must_use]
    pub fn new(nvec: Vec<usize>) -> Self {
        Self { nvec }
    }

    #[must_use]
    pub fn contains(&self, action: &[usize]) -> bool {
        action.len() == self.nvec.len() && action.iter().zip(&self.nvec).all(|(a, n)| a < n)
    }

    /// Number of distinct actions.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.nvec.iter().product()
    }

    /// Uniform sample, one draw per component.
    ///
    /// # Panics
    ///
    /// Panics if any component has zero choices.
    #[must_use]
    pub fn sample(&self, rng: &fastrand::Rng) -> Vec<usize> {
        self.nvec.iter().map(|&n| rng.usize(..n)).collect()
    }

    /// Every action in lexicographic order, last component fastest.
    pub fn iter(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        let total = if self.nvec.is_empty() { 0 } else { self.cardinality() };
        (0..total).map(move |mut flat| {
            let mut action = vec![0; self.nvec.len()];
            for (slot, &n) in action.iter_mut().zip(&self.nvec).rev() {
                *slot = flat % n;
                flat /= n;
            }
            action
        })
    }
}

/// Box of `f32` values with per-element bounds, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    pub shape: Vec<usize>,
    pub low: Vec<f32>,
    pub high: Vec<f32>,
}

impl BoxSpace {
    /// `rows x columns` box where every row shares the same column bounds.
    #[must_use]
    pub fn from_columns(rows: usize, low: &[f32], high: &[f32]) -> Self {
        debug_assert_eq!(low.len(), high.len());
        Self {
            shape: vec![rows, low.len()],
            low: low.repeat(rows),
            high: high.repeat(rows),
        }
    }

    /// Number of scalar elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, values: &[f32]) -> bool {
        values.len() == self.len()
            && values
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }
}
