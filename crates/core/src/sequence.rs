//! Fizzbuzz labeling of integers and inclusive ranges.
//!
//! A [`SequenceGenerator`] owns a validated pair of [`Moduli`]; a zero
//! modulus is rejected by [`SequenceGenerator::new`]. Once built, classifying
//! cannot fail and generating only fails for ranges too large to hold in
//! memory. The free functions [`classify`] and [`generate`] validate on every
//! call and are convenient for one-off use.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// Modulus used for "fizz" when none is given
pub const DEFAULT_FIZZ: i64 = 3;
/// Modulus used for "buzz" when none is given
pub const DEFAULT_BUZZ: i64 = 5;

/// The textual output for one integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    FizzBuzz,
    Fizz,
    Buzz,
    Number(i64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::FizzBuzz => f.write_str("fizzbuzz"),
            Label::Fizz => f.write_str("fizz"),
            Label::Buzz => f.write_str("buzz"),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A pair of non-zero divisors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moduli {
    fizz: i64,
    buzz: i64,
}

impl Moduli {
    pub fn new(fizz: i64, buzz: i64) -> Result<Self> {
        if fizz == 0 {
            return Err(Error::InvalidArgument {
                name: "fizz",
                value: fizz,
            });
        }
        if buzz == 0 {
            return Err(Error::InvalidArgument {
                name: "buzz",
                value: buzz,
            });
        }
        Ok(Self { fizz, buzz })
    }

    pub fn fizz(&self) -> i64 {
        self.fizz
    }

    pub fn buzz(&self) -> i64 {
        self.buzz
    }
}

impl Default for Moduli {
    fn default() -> Self {
        Self {
            fizz: DEFAULT_FIZZ,
            buzz: DEFAULT_BUZZ,
        }
    }
}

// `m` is never zero here. `wrapping_rem` keeps `i64::MIN % -1` from panicking;
// its result there is 0, which is also the mathematically correct answer.
fn is_multiple(n: i64, m: i64) -> bool {
    n.wrapping_rem(m) == 0
}

/// Labels integers under a fixed pair of moduli
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceGenerator {
    moduli: Moduli,
}

impl SequenceGenerator {
    /// Create a generator, rejecting a zero `fizz` or `buzz`
    pub fn new(fizz: i64, buzz: i64) -> Result<Self> {
        Ok(Self::with_moduli(Moduli::new(fizz, buzz)?))
    }

    pub fn with_moduli(moduli: Moduli) -> Self {
        Self { moduli }
    }

    pub fn moduli(&self) -> Moduli {
        self.moduli
    }

    /// Label a single integer.
    ///
    /// The checks run in a fixed order and the first match wins, so with
    /// `fizz = 4, buzz = 6` the number 4 is `fizz` and 12 is `fizzbuzz`.
    pub fn classify(&self, n: i64) -> Label {
        let fizz = is_multiple(n, self.moduli.fizz);
        let buzz = is_multiple(n, self.moduli.buzz);

        if fizz && buzz {
            Label::FizzBuzz
        } else if fizz {
            Label::Fizz
        } else if buzz {
            Label::Buzz
        } else {
            Label::Number(n)
        }
    }

    /// Lazily label every integer in `start..=end`, ascending
    pub fn labels(&self, start: i64, end: i64) -> impl Iterator<Item = Label> + use<> {
        let generator = *self;
        (start..=end).map(move |n| generator.classify(n))
    }

    /// Label every integer in `start..=end`. Empty when `start > end`.
    ///
    /// The whole sequence is allocated up front. A range whose labels cannot
    /// be allocated fails with [`Error::RangeTooLarge`] before any label is
    /// produced.
    pub fn generate(&self, start: i64, end: i64) -> Result<Vec<Label>> {
        let len = sequence_len(start, end);
        debug!(
            start,
            end,
            fizz = self.moduli.fizz(),
            buzz = self.moduli.buzz(),
            len = %len,
            "generating labels"
        );

        let too_large = || Error::RangeTooLarge { start, end, len };
        let capacity = usize::try_from(len).map_err(|_| too_large())?;
        let mut labels = Vec::new();
        labels
            .try_reserve_exact(capacity)
            .map_err(|_| too_large())?;
        labels.extend(self.labels(start, end));
        Ok(labels)
    }
}

/// Label `n` under the given moduli
pub fn classify(n: i64, fizz: i64, buzz: i64) -> Result<Label> {
    Ok(SequenceGenerator::new(fizz, buzz)?.classify(n))
}

/// Label every integer in `start..=end` under the given moduli.
///
/// The moduli and the range size are checked before any label is produced,
/// so an error never comes with a partial sequence.
pub fn generate(start: i64, end: i64, fizz: i64, buzz: i64) -> Result<Vec<Label>> {
    SequenceGenerator::new(fizz, buzz)?.generate(start, end)
}

/// Number of integers in `start..=end`
pub fn sequence_len(start: i64, end: i64) -> u128 {
    if start > end {
        0
    } else {
        (i128::from(end) - i128::from(start) + 1) as u128
    }
}
