use std::fmt;

/// A single binary digit.
///
/// Ordered so that `Zero < One`, which makes equal-length digit slices compare
/// the same lexicographically as they do numerically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Parses `'0'` or `'1'`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    pub fn is_one(self) -> bool {
        self == Self::One
    }

    /// Bitwise complement.
    pub fn flip(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    /// Full adder: returns `(sum, carry)` for `self + other + carry_in`.
    pub(crate) fn full_add(self, other: Self, carry_in: Self) -> (Self, Self) {
        let ones = [self, other, carry_in].iter().filter(|b| b.is_one()).count();
        let sum = if ones % 2 == 1 { Self::One } else { Self::Zero };
        let carry = if ones >= 2 { Self::One } else { Self::Zero };
        (sum, carry)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
