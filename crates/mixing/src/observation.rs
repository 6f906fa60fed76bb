use crate::paint::Paint;

/// Number of columns per beaker: red, green, blue, amount.
pub const COLUMNS: usize = 4;

/// One observation row. `#[repr(C)]` so a slice of rows can be viewed as a
/// flat `[f32]` buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BeakerRecord {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub amount: f32,
}

impl From<&Paint> for BeakerRecord {
    #[allow(clippy::cast_possible_truncation)]
    fn from(paint: &Paint) -> Self {
        Self {
            r: f32::from(paint.color.r),
            g: f32::from(paint.color.g),
            b: f32::from(paint.color.b),
            amount: paint.amount as f32,
        }
    }
}

/// Fixed-shape `num_beakers x 4` observation matrix, rows in beaker order.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    rows: Vec<BeakerRecord>,
}

impl Observation {
    /// Builds the matrix in a single pass over the beakers.
    #[must_use]
    pub fn from_beakers(beakers: &[Paint]) -> Self {
        Self {
            rows: beakers.iter().map(BeakerRecord::from).collect(),
        }
    }

    /// `(num_beakers, 4)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), COLUMNS)
    }

    #[must_use]
    pub fn rows(&self) -> &[BeakerRecord] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, beaker: usize) -> Option<&BeakerRecord> {
        self.rows.get(beaker)
    }

    /// Row-major view of the whole matrix.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(self.rows.as_slice())
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f32> {
        self.as_slice().to_vec()
    }
}
