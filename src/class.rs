//! Character classification for plate segmentation.
//!
//! A plate is segmented wherever a numeral sits next to a non-numeral. Only
//! the ASCII digits `0`-`9` count as numerals; every other character,
//! including non-ASCII digits, is [`CharacterClass::NonDigit`].

/// The separator placed between plate segments.
pub const SEPARATOR: char = '-';

/// Whether a character is a numeral or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// `0` through `9`.
    Digit,
    /// Anything else.
    NonDigit,
}

impl CharacterClass {
    /// Classifies a single character.
    ///
    /// # Example
    ///
    /// ```
    /// use plate_formatter::CharacterClass;
    ///
    /// assert_eq!(CharacterClass::of('7'), CharacterClass::Digit);
    /// assert_eq!(CharacterClass::of('x'), CharacterClass::NonDigit);
    /// ```
    #[inline]
    pub const fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            Self::Digit
        } else {
            Self::NonDigit
        }
    }

    /// Returns true for [`CharacterClass::Digit`].
    #[inline]
    pub const fn is_digit(self) -> bool {
        matches!(self, Self::Digit)
    }
}

/// Returns true when a separator may go between `current` and `next`.
///
/// The two characters must differ in class and neither may be a separator.
#[inline]
pub fn is_transition(current: char, next: char) -> bool {
    current != SEPARATOR
        && next != SEPARATOR
        && CharacterClass::of(current) != CharacterClass::of(next)
}
