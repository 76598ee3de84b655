//! Next-sample heuristics for two shapes of sampled functions.
//!
//! All functions take samples `(x, f(x))` sorted ascending by x. Sortedness is not checked.
use super::{Branch, Bracket, StepError};
use nalgebra::Vector2;

type Point = Vector2<f64>;

fn check_len(samples: &[Point]) -> Result<usize, StepError> {
    match samples.len() {
        n if n < 2 => Err(StepError::InsufficientSamples(n)),
        n => Ok(n),
    }
}

/// Next x to evaluate when searching the root of a strictly monotonic function.
///
/// With two samples, returns their midpoint. Otherwise the direction of the function is taken
/// from the first two samples, and the first sign change brackets the root. The x-intercept of
/// the secant through the bracket is returned, unless the bracket touches the first or last
/// sample, in which case its midpoint is returned.
///
/// # Errors
///
/// - [`StepError::InsufficientSamples`] with fewer than 2 samples.
/// - [`StepError::DegenerateInput`] if the bracketing samples have the same x or y.
///
/// # Example
///
/// ```
/// use geometrylib_math::root_eq::next_x_monotonic;
/// use geometrylib_math::Vector2;
///
/// let samples = [
///     Vector2::new(0.0, -4.0),
///     Vector2::new(1.0, -1.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(3.0, 5.0),
/// ];
/// let next = next_x_monotonic(&samples).unwrap();
/// assert!((next - 4.0 / 3.0).abs() < 1e-12);
/// ```
#[profiling::function]
pub fn next_x_monotonic(samples: &[Point]) -> Result<f64, StepError> {
    let len = check_len(samples)?;
    if len == 2 {
        return Ok(Bracket::new(0, 1).midpoint(samples));
    }

    let increasing = samples[0].y <= samples[1].y;
    let crossing = (1..len)
        .find(|&i| if increasing { samples[i].y > 0.0 } else { samples[i].y < 0.0 })
        .unwrap_or(1);
    let bracket = Bracket::new(crossing - 1, crossing);

    if bracket.touches_boundary(len) {
        log::trace!("next_x_monotonic: bracket {bracket:?} at the boundary, bisecting");
        return Ok(bracket.midpoint(samples));
    }
    bracket.secant_root(samples)
}

/// Intersection of the line of slope `m_left` through `d0` with the line of slope `m_right`
/// through `d1`.
///
/// # Errors
///
/// Returns [`StepError::DegenerateInput`] if both lines are parallel.
pub fn secant_intersection(d0: Point, d1: Point, m_left: f64, m_right: f64) -> Result<Point, StepError> {
    let x = (d1.y - d0.y + m_left * d0.x - m_right * d1.x) / (m_left - m_right);
    let y = m_left * (x - d0.x) + d0.y;
    if x.is_finite() && y.is_finite() {
        Ok(Point::new(x, y))
    } else {
        Err(StepError::DegenerateInput { left: d0.x, right: d1.x })
    }
}

/// Index where the descending run from the left ends, or the first negative sample.
fn left_branch_index(samples: &[Point]) -> usize {
    let mut index = 1;
    for i in 1..samples.len() {
        if samples[i].y < 0.0 {
            return i;
        }
        if samples[i].y > samples[i - 1].y {
            break;
        }
        index = i;
    }
    index
}

/// Mirror of [`left_branch_index`], scanning from the right.
fn right_branch_index(samples: &[Point]) -> usize {
    let mut index = samples.len() - 1;
    for i in (0..samples.len() - 1).rev() {
        if samples[i].y < 0.0 {
            return i;
        }
        if samples[i].y > samples[i + 1].y {
            break;
        }
        index = i;
    }
    index
}

/// Next x to evaluate when searching a root of a function with a monotonic derivative, on one
/// side of its minimum.
///
/// The samples are scanned from the outer end of `branch` towards the minimum, stopping at the
/// lowest sample of the run or at the first negative one.
///
/// - A negative sample brackets the root with its outer neighbour: their midpoint is returned.
/// - Within 2 samples of the start, the midpoint of samples 1 and 2 is returned; within 2
///   samples of the end, the midpoint of the last two samples.
/// - Otherwise two local two-segment models of the curve are built from the secants around the
///   lowest sample, and the x of whichever corner lies lower is returned.
///
/// # Errors
///
/// - [`StepError::InsufficientSamples`] with fewer than 2 samples.
/// - [`StepError::DegenerateInput`] if neighbouring samples share an x, or the secants are
///   parallel.
#[profiling::function]
pub fn next_x_parabolic(samples: &[Point], branch: Branch) -> Result<f64, StepError> {
    let len = check_len(samples)?;
    if len == 2 {
        return Ok(Bracket::new(0, 1).midpoint(samples));
    }

    let index = match branch {
        Branch::Left => left_branch_index(samples),
        Branch::Right => right_branch_index(samples),
    };

    if samples[index].y < 0.0 {
        let bracket = match branch {
            Branch::Left => Some(Bracket::new(index - 1, index)),
            Branch::Right if index + 1 < len => Some(Bracket::new(index, index + 1)),
            Branch::Right => None,
        };
        if let Some(bracket) = bracket {
            return Ok(bracket.midpoint(samples));
        }
    }

    if index <= 2 {
        log::trace!("next_x_parabolic: index {index} near the first sample");
        return Ok(Bracket::new(1, 2).midpoint(samples));
    }
    if index + 2 >= len {
        log::trace!("next_x_parabolic: index {index} near the last sample");
        return Ok(Bracket::new(len - 2, len - 1).midpoint(samples));
    }

    let gradient_l = Bracket::new(index - 1, index).slope(samples);
    let gradient_r = Bracket::new(index, index + 1).slope(samples);
    let gradient_ll = Bracket::new(index - 2, index - 1).slope(samples);
    let gradient_rr = Bracket::new(index + 1, index + 2).slope(samples);

    let corner_l = secant_intersection(samples[index - 1], samples[index], gradient_ll, gradient_r)?;
    let corner_r = secant_intersection(samples[index], samples[index + 1], gradient_l, gradient_rr)?;

    Ok(if corner_l.y < corner_r.y { corner_l.x } else { corner_r.x })
}

/// Whether a function with a monotonic derivative could still dip below zero, given its samples.
///
/// True with fewer than 3 samples, or if a sample is already negative. Otherwise the secants on
/// both sides of the lowest sample are each extended one sample spacing across it; the function
/// can be negative if either extension ends below zero. This is a first-order heuristic, strong
/// curvature between samples can hide a negative region.
pub fn can_be_negative(samples: &[Point]) -> bool {
    let len = samples.len();
    if len < 3 || samples.iter().any(|sample| sample.y < 0.0) {
        return true;
    }

    let lowest = (1..len).fold(0, |min, i| if samples[i].y < samples[min].y { i } else { min });
    let mid = lowest.clamp(1, len - 2);
    let (left, centre, right) = (samples[mid - 1], samples[mid], samples[mid + 1]);

    let descent = Bracket::new(mid - 1, mid).slope(samples) * (right.x - centre.x) + centre.y;
    let ascent = Bracket::new(mid, mid + 1).slope(samples) * (left.x - centre.x) + centre.y;

    // NaN extensions (duplicate x) cannot rule anything out
    !(descent >= 0.0 && ascent >= 0.0)
}
