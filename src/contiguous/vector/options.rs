use super::Vector;

/// A single step in the construction of a [`Vector`].
///
/// Options are absolute: applying one completely replaces the size, capacity and contents set up
/// by any option applied before it. Counts are signed and any value `<= 0` produces an empty
/// Vector with capacity 0, rather than an error.
///
/// # Examples
/// ```
/// # use dynamic_array::contiguous::{Vector, VectorOption};
/// let vec = Vector::with_options([VectorOption::Size(3, 42)]);
/// assert_eq!(vec.data(), &[42, 42, 42]);
///
/// let vec: Vector<u8> = Vector::with_options([VectorOption::Capacity(-5)]);
/// assert_eq!(vec.capacity(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorOption<'a, T> {
    /// An empty Vector with the given capacity.
    Capacity(isize),
    /// A Vector containing exactly these values, with no spare capacity.
    Values(Vector<T>),
    /// A Vector of the given size, with every element set to the provided default.
    Size(isize, T),
    /// A Vector containing the given number of copies of a value. Behaves identically to
    /// [`Size`](VectorOption::Size).
    Fill(isize, T),
    /// A Vector containing a clone of each value in the slice, with no spare capacity.
    FromSlice(&'a [T]),
}

impl<'a, T> VectorOption<'a, T> {
    /// Creates a [`Values`](VectorOption::Values) option from anything that can be iterated.
    pub fn values<I: IntoIterator<Item = T>>(values: I) -> VectorOption<'a, T> {
        VectorOption::Values(values.into_iter().collect())
    }
}

impl<T: Clone> VectorOption<'_, T> {
    /// Applies this option to `vec`, replacing its previous state entirely.
    ///
    /// # Panics
    /// Panics if the memory layout of the resulting Vector would have a size that exceeds
    /// [`isize::MAX`].
    pub fn apply(self, vec: &mut Vector<T>) {
        *vec = match self {
            VectorOption::Capacity(cap) => Vector::with_cap(normalize(cap)),
            VectorOption::Values(mut values) => {
                values.shrink_to_fit();
                values
            },
            VectorOption::Size(size, default) => Vector::repeat(default, normalize(size)),
            VectorOption::Fill(count, value) => Vector::repeat(value, normalize(count)),
            VectorOption::FromSlice(slice) => Vector::from(slice),
        };
    }
}

/// Non-positive counts describe an empty Vector.
fn normalize(count: isize) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// A builder for a [`Vector`], recording [`VectorOption`]s to apply in order. Available via
/// [`Vector::options`] to avoid additional use statements.
///
/// Because options are absolute, the last option recorded determines the Vector produced by
/// [`build`](VectorOptions::build). A builder with no options produces an empty Vector.
///
/// # Examples
/// ```
/// # use dynamic_array::contiguous::Vector;
/// let vec = Vector::options()
///     .capacity(10)
///     .values([1, 2, 3])
///     .build();
/// assert_eq!(vec.size(), 3);
/// assert_eq!(vec.capacity(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorOptions<'a, T> {
    pub(crate) steps: Vector<VectorOption<'a, T>>,
}

impl<'a, T> VectorOptions<'a, T> {
    /// Creates a builder with no options recorded.
    pub const fn new() -> VectorOptions<'a, T> {
        VectorOptions {
            steps: Vector::new(),
        }
    }

    /// Records an arbitrary option.
    pub fn option(mut self, option: VectorOption<'a, T>) -> Self {
        self.steps.push_back(option);
        self
    }

    /// See [`VectorOption::Capacity`].
    pub fn capacity(self, cap: isize) -> Self {
        self.option(VectorOption::Capacity(cap))
    }

    /// See [`VectorOption::Values`].
    pub fn values<I: IntoIterator<Item = T>>(self, values: I) -> Self {
        self.option(VectorOption::values(values))
    }

    /// See [`VectorOption::Size`].
    pub fn size(self, size: isize, default: T) -> Self {
        self.option(VectorOption::Size(size, default))
    }

    /// See [`VectorOption::Fill`].
    pub fn fill(self, count: isize, value: T) -> Self {
        self.option(VectorOption::Fill(count, value))
    }

    /// See [`VectorOption::FromSlice`].
    pub fn slice(self, slice: &'a [T]) -> Self {
        self.option(VectorOption::FromSlice(slice))
    }
}

impl<T: Clone> VectorOptions<'_, T> {
    /// Produces a Vector by applying every recorded option in order, starting from an empty
    /// Vector.
    ///
    /// # Panics
    /// Panics if the memory layout of any intermediate Vector would have a size that exceeds
    /// [`isize::MAX`].
    pub fn build(self) -> Vector<T> {
        Vector::with_options(self.steps)
    }
}

impl<T> Default for VectorOptions<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FromIterator<VectorOption<'a, T>> for VectorOptions<'a, T> {
    fn from_iter<I: IntoIterator<Item = VectorOption<'a, T>>>(iter: I) -> Self {
        VectorOptions {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> Extend<VectorOption<'a, T>> for VectorOptions<'a, T> {
    fn extend<I: IntoIterator<Item = VectorOption<'a, T>>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}

impl<T> Vector<T> {
    /// Creates a new, empty [`VectorOptions`] builder.
    pub const fn options<'a>() -> VectorOptions<'a, T> {
        VectorOptions::new()
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a new Vector by applying each of the provided options in order, starting from an
    /// empty Vector with capacity 0. Each option replaces the state produced by the previous ones,
    /// so the last option determines the result.
    ///
    /// # Panics
    /// Panics if the memory layout of any intermediate Vector would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::contiguous::{Vector, VectorOption};
    /// let people = [("Alice", 30), ("Bob", 25)];
    /// let vec = Vector::with_options([
    ///     VectorOption::Fill(10, ("Unknown", 0)),
    ///     VectorOption::FromSlice(&people),
    /// ]);
    /// assert_eq!(vec.data(), &people);
    /// ```
    pub fn with_options<'a, I>(options: I) -> Vector<T>
    where
        I: IntoIterator<Item = VectorOption<'a, T>>,
        T: 'a,
    {
        let mut vec = Vector::new();
        for option in options {
            option.apply(&mut vec);
        }
        vec
    }
}
