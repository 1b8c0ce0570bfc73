//! Streaming formatting for values as they arrive.
//!
//! Iterator adapters that format plate values one at a time, for reading
//! lines from a file or a pipe without collecting them first.
//!
//! # Example
//!
//! ```
//! use plate_formatter::stream::FormatExt;
//!
//! let lines = ["ab12cd", "AB-12-CD", "1234ab"];
//! let formatted: Vec<String> = lines.iter().copied().format_plates().collect();
//!
//! assert_eq!(formatted, ["AB-12-CD", "AB-12-CD", "12-34-AB"]);
//! ```

use crate::format::{format_plate, reformat, Reformat};

/// Iterator yielding the formatted form of every value.
///
/// Created by [`FormatExt::format_plates`].
#[derive(Debug, Clone)]
pub struct FormatStream<I> {
    inner: I,
}

impl<I> FormatStream<I> {
    /// Wraps an iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for FormatStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| format_plate(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for FormatStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for FormatStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| format_plate(s.as_ref()))
    }
}

/// Iterator yielding a [`Reformat`] together with each value's index.
///
/// Created by [`FormatExt::reformat_plates`].
#[derive(Debug, Clone)]
pub struct ReformatStream<I> {
    inner: I,
    index: usize,
}

impl<I> ReformatStream<I> {
    /// Wraps an iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner, index: 0 }
    }
}

impl<I, S> Iterator for ReformatStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (usize, Reformat);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| {
            let outcome = reformat(s.as_ref());
            let index = self.index;
            self.index += 1;
            (index, outcome)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait adding plate formatting to any iterator of strings.
pub trait FormatExt: Iterator + Sized {
    /// Formats every value.
    fn format_plates(self) -> FormatStream<Self>;

    /// Reports, per value, whether it would be rewritten.
    ///
    /// # Example
    ///
    /// ```
    /// use plate_formatter::stream::FormatExt;
    ///
    /// let values = ["AB-12-CD", "ab12cd"];
    /// let changed: Vec<usize> = values
    ///     .iter()
    ///     .copied()
    ///     .reformat_plates()
    ///     .filter(|(_, outcome)| outcome.is_changed())
    ///     .map(|(index, _)| index)
    ///     .collect();
    /// assert_eq!(changed, [1]);
    /// ```
    fn reformat_plates(self) -> ReformatStream<Self>;
}

impl<I: Iterator + Sized> FormatExt for I {
    #[inline]
    fn format_plates(self) -> FormatStream<Self> {
        FormatStream::new(self)
    }

    #[inline]
    fn reformat_plates(self) -> ReformatStream<Self> {
        ReformatStream::new(self)
    }
}
