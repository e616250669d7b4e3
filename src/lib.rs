//! v6calc - 128-bit address text/value conversion and prefix arithmetic.
//!
//! This library converts between textual and binary representations of
//! 128-bit network addresses, renders them in canonical and highlighted
//! forms, and performs subnet/prefix arithmetic.
//!
//! # Example
//!
//! ```
//! use v6calc::{Address, Prefix};
//!
//! let addr: Address = "a::1".parse().unwrap();
//! assert_eq!(addr.to_string(), "a::1");
//! assert_eq!(addr.long_string(), "000a:0000:0000:0000:0000:0000:0000:0001");
//!
//! let prefix: Prefix = "0:1:1:1::/64".parse().unwrap();
//! assert_eq!(prefix.next().unwrap().to_string(), "0:1:1:2::/64");
//! ```

pub mod addr;
pub mod error;
pub mod group;
pub mod highlight;
pub mod prefix;
pub mod render;
pub mod tokenizer;

pub use addr::Address;
pub use error::{Error, ParseError, Result};
pub use group::Group;
pub use highlight::{expose_string, multi_expose_string, GroupHighlight, Marker, MarkerConfig};
pub use prefix::{mask_address, Prefix};
pub use render::ZeroRun;
pub use tokenizer::tokenize;
