/// An additive RGB color. Each channel is a `u8`, so the `[0, 255]` range
/// holds by construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Per-channel `255 - c`. Used as a cyan/magenta/yellow proxy; the
    /// transform is its own inverse.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Euclidean distance between the two colors in RGB space.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.channels()
            .iter()
            .zip(other.channels())
            .map(|(&a, b)| {
                let d = f64::from(a) - f64::from(b);
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        c.channels()
    }
}

/// A transfer request: move `ratio` percent of beaker `from` into beaker `to`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub from: usize,
    pub to: usize,
    /// Transfer ratio index in `[0, 100)`; the moved fraction is `ratio / 100`.
    pub ratio: usize,
}

impl Action {
    #[must_use]
    pub const fn new(from: usize, to: usize, ratio: usize) -> Self {
        Self { from, to, ratio }
    }

    /// Fraction of the source volume this action moves.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.ratio as f64;
        ratio / 100.0
    }
}

impl From<[usize; 3]> for Action {
    fn from(a: [usize; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl TryFrom<&[usize]> for Action {
    type Error = crate::MixingError;

    fn try_from(a: &[usize]) -> Result<Self, Self::Error> {
        match *a {
            [from, to, ratio] => Ok(Self::new(from, to, ratio)),
            _ => Err(crate::MixingError::MalformedAction { len: a.len() }),
        }
    }
}
