use crate::mixer;
use crate::types::Color;
use crate::MixingError;

/// A quantity of colored substance. `amount` is a volume in arbitrary units
/// (millilitres in the bundled scenes) and never goes below zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub amount: f64,
}

/// Outcome of [`Paint::split`].
///
/// `remainder` is a snapshot of what is left in the source after a partial
/// split and is `None` when nothing was taken or everything was taken. The
/// source paint itself is updated in place, so callers that only move the
/// portion can ignore the remainder.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Split {
    pub portion: Paint,
    pub remainder: Option<Paint>,
}

impl Paint {
    #[must_use]
    pub const fn new(color: Color, amount: f64) -> Self {
        Self { color, amount }
    }

    /// Like [`Paint::new`] but rejects negative, NaN and infinite amounts.
    ///
    /// # Errors
    ///
    /// Returns [`MixingError::InvalidAmount`] for an amount that is not a
    /// finite non-negative number.
    pub fn checked(color: Color, amount: f64) -> Result<Self, MixingError> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Self::new(color, amount))
        } else {
            Err(MixingError::InvalidAmount { amount })
        }
    }

    #[must_use]
    pub const fn empty(color: Color) -> Self {
        Self::new(color, 0.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amount <= 0.0
    }

    /// Combines both paints into a new one holding their total volume.
    ///
    /// Adding an empty paint keeps `self`'s color, even when `self` is empty
    /// too.
    #[must_use]
    pub fn mix_with(&self, other: &Paint) -> Paint {
        if other.is_empty() {
            return *self;
        }
        let color = mixer::mix(self.color, self.amount, other.color, other.amount);
        Paint::new(color, self.amount + other.amount)
    }

    /// Removes `delta` from the volume, stopping at zero.
    pub fn subtract_amount(&mut self, delta: f64) {
        self.amount = (self.amount - delta).max(0.0);
    }

    /// Takes `requested` volume out of this paint.
    ///
    /// * `requested <= 0` (or NaN): an empty portion, `self` untouched.
    /// * `requested >= self.amount`: the whole paint is moved and `self` is
    ///   left empty, so no volume is created.
    /// * otherwise `self` keeps `amount - requested` and a copy of it is
    ///   returned as the remainder.
    pub fn split(&mut self, requested: f64) -> Split {
        if requested.is_nan() || requested <= 0.0 {
            return Split {
                portion: Paint::empty(self.color),
                remainder: None,
            };
        }

        if requested >= self.amount {
            let portion = *self;
            self.amount = 0.0;
            return Split {
                portion,
                remainder: None,
            };
        }

        let portion = Paint::new(self.color, requested);
        self.subtract_amount(requested);
        Split {
            portion,
            remainder: Some(*self),
        }
    }
}
