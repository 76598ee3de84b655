//! The generic sample array and its fixed-arity aliases.
use crate::columns::Columns;
use crate::sample::Sample;
use nalgebra::{Vector2, Vector3};
use smallvec::SmallVec;
use std::{fmt, io, ops};

/// Number of samples an array holds before it needs a separately owned buffer.
pub const INLINE_CAPACITY: usize = 128;

type SampleBuffer<S> = SmallVec<[S; INLINE_CAPACITY]>;

/// Where the samples of an array currently live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Samples are stored inside the array itself.
    Inline,
    /// Samples are stored in an owned heap buffer. An array never leaves this state.
    Owned,
}

/// Growable array of samples with inline storage for the first [`INLINE_CAPACITY`] entries.
#[derive(Clone)]
pub struct DataArray<S> {
    data: SampleBuffer<S>,
}

/// Array of scalars.
pub type DataArray1 = DataArray<f64>;
/// Array of `(x, y)` samples.
pub type DataArray2 = DataArray<Vector2<f64>>;
/// Array of `(x, y, z)` samples.
pub type DataArray3 = DataArray<Vector3<f64>>;

impl<S> Default for DataArray<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug> fmt::Debug for DataArray<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("storage", &self.storage())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<S> ops::Index<usize> for DataArray<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<S> Extend<S> for DataArray<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}

impl<S> FromIterator<S> for DataArray<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, S> IntoIterator for &'a DataArray<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> DataArray<S> {
    /// Creates an empty array using inline storage.
    pub const fn new() -> Self {
        Self {
            data: SampleBuffer::new_const(),
        }
    }

    /// Returns the number of samples in the array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the array holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of slots currently available without growing.
    ///
    /// This is always `INLINE_CAPACITY * 2^k`.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns where the samples are currently stored.
    pub fn storage(&self) -> Storage {
        if self.data.spilled() {
            Storage::Owned
        } else {
            Storage::Inline
        }
    }

    /// Returns the live samples, in order.
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    /// Iterates over the live samples, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.data.iter()
    }

    /// Appends a sample at the end of the array, doubling the capacity first if it is full.
    pub fn push(&mut self, sample: S) {
        self.reserve_slot();
        self.data.push(sample);
    }

    /// Removes all samples. Capacity and storage location are kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn reserve_slot(&mut self) {
        let capacity = self.data.capacity();
        if self.data.len() < capacity {
            return;
        }

        if self.data.spilled() {
            log::trace!("DataArray: growing owned storage {capacity} -> {}", capacity * 2);
        } else {
            log::debug!("DataArray: promoting to owned storage ({capacity} -> {} slots)", capacity * 2);
        }
        self.data.reserve_exact(capacity);
    }
}

impl<S: Sample> DataArray<S> {
    /// Renders one labeled line per dimension, see [`Columns`].
    pub fn columns<'a>(&'a self, names: &'a [&'a str]) -> Columns<'a, S> {
        let dimensions = S::DIMENSIONS
            .or_else(|| self.data.first().map(|sample| sample.coords().len()))
            .unwrap_or(0);
        Columns::new(self.as_slice(), dimensions, names)
    }

    /// Writes the output of [`Self::columns`] into `sink`.
    pub fn write_columns(&self, names: &[&str], mut sink: impl io::Write) -> io::Result<()> {
        write!(sink, "{}", self.columns(names))
    }
}

impl DataArray<Vector2<f64>> {
    /// Appends the sample `(x, y)`.
    pub fn push_xy(&mut self, x: f64, y: f64) {
        self.push(Vector2::new(x, y));
    }

    /// Inserts `(x, y)` before the first sample whose x is strictly greater than `x`.
    ///
    /// The array is assumed to be sorted by x already; this is not checked. Samples with an
    /// equal x stay in front of the new one.
    pub fn insert_sorted(&mut self, x: f64, y: f64) {
        self.reserve_slot();
        let index = self
            .data
            .iter()
            .position(|sample| sample.x > x)
            .unwrap_or(self.data.len());
        self.data.insert(index, Vector2::new(x, y));
    }
}

impl DataArray<Vector3<f64>> {
    /// Appends the sample `(x, y, z)`.
    pub fn push_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.push(Vector3::new(x, y, z));
    }
}
