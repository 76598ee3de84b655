//! Sample array with a runtime number of dimensions.
use crate::array::{DataArray, Storage};
use crate::columns::Columns;
use crate::error::DataToolError;
use std::io;

/// Growable array of samples whose number of coordinates is chosen at runtime.
///
/// Each sample is allocated separately and holds exactly [`Self::arity`] values.
#[derive(Debug, Clone)]
pub struct DataArrayN {
    samples: DataArray<Box<[f64]>>,
    arity: usize,
}

impl DataArrayN {
    /// Creates an empty array of samples with `arity` coordinates each.
    ///
    /// # Errors
    ///
    /// Returns [`DataToolError::ZeroArity`] if `arity` is zero.
    pub fn new(arity: usize) -> Result<Self, DataToolError> {
        if arity == 0 {
            return Err(DataToolError::ZeroArity);
        }
        Ok(Self {
            samples: DataArray::new(),
            arity,
        })
    }

    /// Number of coordinates of every sample.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of samples in the array.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the array holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the number of slots currently available without growing.
    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    /// Returns where the samples are currently stored.
    pub fn storage(&self) -> Storage {
        self.samples.storage()
    }

    /// Returns the coordinates of the sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.samples.as_slice().get(index).map(|sample| &**sample)
    }

    /// Iterates over the coordinates of every sample, in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.samples.iter().map(|sample| &**sample)
    }

    /// Appends a copy of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`DataToolError::ArityMismatch`] if `values` does not hold exactly
    /// [`Self::arity`] coordinates; the array is left untouched.
    pub fn push(&mut self, values: &[f64]) -> Result<(), DataToolError> {
        self.check_arity(values.len())?;
        self.samples.push(values.into());
        Ok(())
    }

    /// Appends a sample whose coordinates are read through references.
    ///
    /// # Errors
    ///
    /// See [`Self::push`].
    pub fn push_from_refs(&mut self, values: &[&f64]) -> Result<(), DataToolError> {
        self.check_arity(values.len())?;
        self.samples.push(values.iter().map(|value| **value).collect());
        Ok(())
    }

    /// Removes all samples. Capacity and storage location are kept.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Renders one labeled line per dimension, see [`Columns`].
    pub fn columns<'a>(&'a self, names: &'a [&'a str]) -> Columns<'a, Box<[f64]>> {
        Columns::new(self.samples.as_slice(), self.arity, names)
    }

    /// Writes the output of [`Self::columns`] into `sink`.
    pub fn write_columns(&self, names: &[&str], mut sink: impl io::Write) -> io::Result<()> {
        write!(sink, "{}", self.columns(names))
    }

    fn check_arity(&self, actual: usize) -> Result<(), DataToolError> {
        if actual == self.arity {
            Ok(())
        } else {
            Err(DataToolError::ArityMismatch {
                expected: self.arity,
                actual,
            })
        }
    }
}
