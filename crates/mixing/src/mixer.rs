//! Subtractive color mixing.
//!
//! Pigments absorb light, so two paints are blended in complement space
//! (`255 - c` per channel, a cyan/magenta/yellow stand-in) rather than in RGB.
//! The complements are averaged with the paint amounts as weights, floored to
//! whole channel values and converted back.

use crate::types::Color;

/// Resulting color of combining `amount_a` of `color_a` with `amount_b` of
/// `color_b`.
///
/// The result is symmetric in its two operands. Non-finite or negative
/// amounts carry no weight. An operand with no weight leaves the other
/// color exactly as it is, and so does mixing a color with itself. When
/// neither operand carries any weight the blend falls back to the
/// unweighted midpoint of the two complements, so mixing two empty beakers
/// never divides by zero.
#[must_use]
pub fn mix(color_a: Color, amount_a: f64, color_b: Color, amount_b: f64) -> Color {
    let wa = weight(amount_a);
    let wb = weight(amount_b);
    let total = wa + wb;

    // The weighted average can land one ulp below an integer channel,
    // which the floor would turn into a whole unit of drift.
    if color_a == color_b {
        return color_a;
    }
    if wb <= 0.0 && wa > 0.0 {
        return color_a;
    }
    if wa <= 0.0 && wb > 0.0 {
        return color_b;
    }

    let ca = color_a.complement().channels();
    let cb = color_b.complement().channels();

    let mut blended = [0u8; 3];
    for (out, (&a, &b)) in blended.iter_mut().zip(ca.iter().zip(cb.iter())) {
        let (a, b) = (f64::from(a), f64::from(b));
        let avg = if total > 0.0 && total.is_finite() {
            (a * wa + b * wb) / total
        } else {
            (a + b) / 2.0
        };
        *out = to_channel(avg);
    }

    Color::from(blended).complement()
}

fn weight(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}
