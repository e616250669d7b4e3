//! The 128-bit address value type.
//!
//! An [`Address`] is two 64-bit limbs forming the big-endian concatenation
//! `high ‖ low`. All operations are functional: nothing mutates in place.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::group::Group;
use crate::highlight::{self, Marker, MarkerConfig};
use crate::render;
use crate::tokenizer;

/// A 128-bit address value.
///
/// Bit 0 is the most-significant bit of `high`; bit 127 is the
/// least-significant bit of `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address {
    /// Upper 64 bits (groups 0-3).
    pub high: u64,
    /// Lower 64 bits (groups 4-7).
    pub low: u64,
}

impl Address {
    /// The all-zero address, the bottom of the address space.
    pub const ZERO: Address = Address { high: 0, low: 0 };

    /// The all-ones address, the top of the address space.
    pub const MAX: Address = Address {
        high: u64::MAX,
        low: u64::MAX,
    };

    /// Pack 8 groups into an address: groups 0-3 form `high`, 4-7 form `low`.
    pub fn from_groups(groups: [Group; 8]) -> Self {
        let mut high = 0u64;
        let mut low = 0u64;
        for group in &groups[..4] {
            high = (high << 16) | u64::from(group.value());
        }
        for group in &groups[4..] {
            low = (low << 16) | u64::from(group.value());
        }
        Address { high, low }
    }

    /// Unpack into 8 groups, most-significant first.
    pub fn groups(&self) -> [Group; 8] {
        let mut groups = [Group::default(); 8];
        for (i, group) in groups.iter_mut().enumerate() {
            let limb = if i < 4 { self.high } else { self.low };
            let shift = 48 - 16 * (i % 4);
            *group = Group::from(((limb >> shift) & 0xffff) as u16);
        }
        groups
    }

    /// The address as a single 128-bit integer.
    pub fn to_u128(self) -> u128 {
        (u128::from(self.high) << 64) | u128::from(self.low)
    }

    /// Build an address from a single 128-bit integer.
    pub fn from_u128(value: u128) -> Self {
        Address {
            high: (value >> 64) as u64,
            low: value as u64,
        }
    }

    /// The next address up, or `None` at the top of the address space.
    pub fn checked_incr(self) -> Option<Address> {
        let (low, carry) = self.low.overflowing_add(1);
        let high = if carry {
            self.high.checked_add(1)?
        } else {
            self.high
        };
        Some(Address { high, low })
    }

    /// The next address down, or `None` at the bottom of the address space.
    pub fn checked_decr(self) -> Option<Address> {
        let (low, borrow) = self.low.overflowing_sub(1);
        let high = if borrow {
            self.high.checked_sub(1)?
        } else {
            self.high
        };
        Some(Address { high, low })
    }

    /// Indexes of the most- and least-significant set bits.
    ///
    /// Bit 0 is the most-significant bit of the whole address. An all-zero
    /// address collapses to `(0, 0)`.
    pub fn bit_span(&self) -> (u32, u32) {
        let start = if self.high != 0 {
            self.high.leading_zeros()
        } else if self.low != 0 {
            self.low.leading_zeros() + 64
        } else {
            0
        };
        let stop = if self.low != 0 {
            127 - self.low.trailing_zeros()
        } else if self.high != 0 {
            63 - self.high.trailing_zeros()
        } else {
            0
        };
        (start, stop)
    }

    /// Fold the difference between two addresses into this accumulator.
    ///
    /// Returns `self OR (a XOR b)`. Chained over a sequence of addresses,
    /// the result marks every bit position that changed anywhere along the
    /// sequence; feed its [`Address::bit_span`] to the highlight renderer.
    pub fn accumulate_diff(self, a: Address, b: Address) -> Address {
        self | (a ^ b)
    }

    /// The 32-character lowercase hex digest, no separators.
    pub fn hex_digest(&self) -> String {
        format!("{:016x}{:016x}", self.high, self.low)
    }

    /// The full decimal rendering of the 128-bit value.
    ///
    /// The limbs are composed into a wide integer only here, at the
    /// formatting boundary.
    pub fn decimal_string(&self) -> String {
        self.to_u128().to_string()
    }

    /// The long form: 8 groups of exactly 4 hex digits, no compression.
    pub fn long_string(&self) -> String {
        render::long(self)
    }

    /// Render with markers around the nibbles covering `[bit_start, bit_end]`.
    ///
    /// See [`highlight::expose_string`].
    pub fn expose_string(&self, bit_start: u32, bit_end: u32, config: &MarkerConfig) -> String {
        highlight::expose_string(*self, bit_start, bit_end, config)
    }

    /// Render with an arbitrary set of per-nibble markers.
    ///
    /// See [`highlight::multi_expose_string`].
    pub fn multi_expose_string(&self, markers: &[Marker]) -> String {
        highlight::multi_expose_string(*self, markers)
    }
}

impl std::ops::BitAnd for Address {
    type Output = Address;

    fn bitand(self, rhs: Address) -> Address {
        Address {
            high: self.high & rhs.high,
            low: self.low & rhs.low,
        }
    }
}

impl std::ops::BitOr for Address {
    type Output = Address;

    fn bitor(self, rhs: Address) -> Address {
        Address {
            high: self.high | rhs.high,
            low: self.low | rhs.low,
        }
    }
}

impl std::ops::BitXor for Address {
    type Output = Address;

    fn bitxor(self, rhs: Address) -> Address {
        Address {
            high: self.high ^ rhs.high,
            low: self.low ^ rhs.low,
        }
    }
}

impl std::ops::Not for Address {
    type Output = Address;

    fn not(self) -> Address {
        Address {
            high: !self.high,
            low: !self.low,
        }
    }
}

/// Canonical form: lowercase, longest zero run compressed to `::`.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::canonical(self))
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let tokens = tokenizer::tokenize(s)?;
        let mut groups = [Group::default(); 8];
        for (group, token) in groups.iter_mut().zip(&tokens) {
            *group = Group::parse(token)?;
        }
        Ok(Address::from_groups(groups))
    }
}
