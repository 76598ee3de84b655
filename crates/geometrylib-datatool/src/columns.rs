//! Column-wise text rendering of sample arrays, meant for debugging.
use crate::sample::Sample;
use std::fmt;

/// Renders each dimension of a set of samples as `name = [v0, v1, ...]`, one line per dimension.
///
/// Dimensions without a name are labeled `x0`, `x1`, ... by position. Values use the shortest
/// representation that reads back to the same `f64`, switching to exponent form below `1e-5` or
/// from `1e16` on, the way `%g` does.
///
/// ```
/// use geometrylib_datatool::DataArray2;
///
/// let mut samples = DataArray2::new();
/// samples.push_xy(0.0, 2.0);
/// samples.push_xy(1.5, -1.0);
///
/// assert_eq!("t = [0, 1.5]\nf = [2, -1]\n", samples.columns(&["t", "f"]).to_string());
/// ```
pub struct Columns<'a, S> {
    samples: &'a [S],
    dimensions: usize,
    names: &'a [&'a str],
}

impl<'a, S> Columns<'a, S> {
    pub(crate) fn new(samples: &'a [S], dimensions: usize, names: &'a [&'a str]) -> Self {
        Self {
            samples,
            dimensions,
            names,
        }
    }
}

impl<S: Sample> fmt::Display for Columns<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dim in 0..self.dimensions {
            match self.names.get(dim) {
                Some(name) => write!(f, "{name} = [")?,
                None => write!(f, "x{dim} = [")?,
            }
            for (i, sample) in self.samples.iter().enumerate() {
                if i != 0 {
                    f.write_str(", ")?;
                }
                write_value(f, sample.coords()[dim])?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if value != 0.0 && magnitude.is_finite() && !(1e-5..1e16).contains(&magnitude) {
        write!(f, "{value:e}")
    } else {
        write!(f, "{value}")
    }
}
