//! Prefix (CIDR) arithmetic.
//!
//! A [`Prefix`] pairs an address with a mask length 0..=128. Prefixes are
//! immutable; the mask address is recomputed on demand.

use std::fmt;
use std::str::FromStr;

use crate::addr::Address;
use crate::error::{Error, ParseError, Result};
use crate::highlight::MarkerConfig;

/// An address paired with a mask length, describing a subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    addr: Address,
    mask: u8,
}

/// The address with exactly `mask` leading one-bits.
///
/// # Example
///
/// ```
/// use v6calc::mask_address;
///
/// let mask = mask_address(64).unwrap();
/// assert_eq!(mask.to_string(), "ffff:ffff:ffff:ffff::");
/// ```
pub fn mask_address(mask: u32) -> Result<Address> {
    if mask > 128 {
        return Err(Error::InvalidMask { mask });
    }
    Ok(mask_bits(mask as u8))
}

/// Mask address for a validated length 0..=128.
fn mask_bits(mask: u8) -> Address {
    let mask = u32::from(mask);
    let high = match mask {
        0 => 0,
        64..=128 => u64::MAX,
        m => u64::MAX << (64 - m),
    };
    let low = match mask {
        0..=64 => 0,
        m => u64::MAX << (128 - m),
    };
    Address { high, low }
}

impl Prefix {
    /// Build a prefix, validating the mask length.
    pub fn new(addr: Address, mask: u32) -> Result<Self> {
        if mask > 128 {
            return Err(Error::InvalidMask { mask });
        }
        Ok(Prefix {
            addr,
            mask: mask as u8,
        })
    }

    /// The address as given; not necessarily subnet-aligned.
    pub fn addr(&self) -> Address {
        self.addr
    }

    /// The mask length.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// The mask as an address: `mask` leading ones, the rest zeros.
    pub fn mask_addr(&self) -> Address {
        mask_bits(self.mask)
    }

    /// First address of the subnet: host bits cleared.
    pub fn first_address(&self) -> Address {
        self.addr & self.mask_addr()
    }

    /// Last address of the subnet: host bits set.
    pub fn last_address(&self) -> Address {
        self.addr | !self.mask_addr()
    }

    /// The next equal-size, naturally-aligned subnet.
    ///
    /// The last address already has every host bit set, so the increment
    /// carries straight into the network bits; no re-masking is needed.
    /// `None` when the subnet already touches the top of the address space.
    pub fn next(&self) -> Option<Prefix> {
        let addr = self.last_address().checked_incr()?;
        Some(Prefix {
            addr,
            mask: self.mask,
        })
    }

    /// The previous equal-size, naturally-aligned subnet.
    ///
    /// Decrements the first address and re-masks, since the stored address
    /// need not be aligned. `None` when the subnet already touches the
    /// bottom of the address space.
    pub fn prev(&self) -> Option<Prefix> {
        let addr = self.first_address().checked_decr()?;
        Some(Prefix {
            addr: addr & self.mask_addr(),
            mask: self.mask,
        })
    }

    /// CIDR string of the subnet-aligned address: `first_address/mask`.
    pub fn subnet_string(&self) -> String {
        format!("{}/{}", self.first_address(), self.mask)
    }

    /// CIDR string with the bit range `[bit_start, bit_end]` highlighted in
    /// the address part.
    pub fn expose_string(&self, bit_start: u32, bit_end: u32, config: &MarkerConfig) -> String {
        format!(
            "{}/{}",
            self.addr.expose_string(bit_start, bit_end, config),
            self.mask
        )
    }
}

/// CIDR form of the address as given: `addr/mask`.
impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

/// CIDR grammar: `<address>["/" <decimal mask 0-128>]`; a missing mask
/// means 128.
impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() > 2 {
            return Err(ParseError::TooManySlashes.into());
        }
        let mask = match parts.get(1) {
            Some(text) => text.parse::<u32>().map_err(|_| ParseError::MalformedMask {
                text: text.to_string(),
            })?,
            None => 128,
        };
        let addr: Address = parts[0].parse()?;
        Prefix::new(addr, mask)
    }
}
