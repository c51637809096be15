//! Named-group registry
//!
//! Identifiers mirror the TLS "Supported Groups" registry so a curve can be
//! carried on the wire by its 16-bit code. Only a subset is backed by an
//! exchanger; the rest are placeholders that the factory rejects.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Named group identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u16)]
pub enum Curve {
    /// NIST P-256
    Secp256r1 = 0x0017,
    /// NIST P-384
    Secp384r1 = 0x0018,
    /// NIST P-521
    Secp521r1 = 0x0019,
    /// Curve25519 in Montgomery form (RFC 7748)
    X25519 = 0x001D,
    /// Curve448 in Montgomery form (RFC 7748)
    X448 = 0x001E,
    /// RFC 7919 finite field group, 2048-bit
    Ffdhe2048 = 0x0100,
    /// RFC 7919 finite field group, 3072-bit
    Ffdhe3072 = 0x0101,
    /// RFC 7919 finite field group, 4096-bit
    Ffdhe4096 = 0x0102,
    /// RFC 7919 finite field group, 6144-bit
    Ffdhe6144 = 0x0103,
    /// RFC 7919 finite field group, 8192-bit
    Ffdhe8192 = 0x0104,
}

impl Curve {
    /// Every registered identifier, in wire-code order
    pub const ALL: [Curve; 10] = [
        Curve::Secp256r1,
        Curve::Secp384r1,
        Curve::Secp521r1,
        Curve::X25519,
        Curve::X448,
        Curve::Ffdhe2048,
        Curve::Ffdhe3072,
        Curve::Ffdhe4096,
        Curve::Ffdhe6144,
        Curve::Ffdhe8192,
    ];

    /// The 16-bit wire code
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Registry name of the group
    pub const fn name(self) -> &'static str {
        match self {
            Curve::Secp256r1 => "secp256r1",
            Curve::Secp384r1 => "secp384r1",
            Curve::Secp521r1 => "secp521r1",
            Curve::X25519 => "x25519",
            Curve::X448 => "x448",
            Curve::Ffdhe2048 => "ffdhe2048",
            Curve::Ffdhe3072 => "ffdhe3072",
            Curve::Ffdhe4096 => "ffdhe4096",
            Curve::Ffdhe6144 => "ffdhe6144",
            Curve::Ffdhe8192 => "ffdhe8192",
        }
    }

    /// Whether an exchanger is implemented for this group
    pub const fn is_supported(self) -> bool {
        matches!(self, Curve::X25519)
    }

    /// Look up a group by its wire code
    pub fn from_id(id: u16) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.id() == id)
            .ok_or(Error::UnsupportedCurve {
                context: "Curve::from_id",
                id,
            })
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for Curve {
    type Error = Error;

    fn try_from(id: u16) -> Result<Self> {
        Self::from_id(id)
    }
}

impl From<Curve> for u16 {
    fn from(curve: Curve) -> Self {
        curve.id()
    }
}

impl FromStr for Curve {
    type Err = Error;

    /// Parses the registry name, ignoring ASCII case.
    ///
    /// Unknown names carry id `0`, which no group is assigned.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.name().eq_ignore_ascii_case(s))
            .ok_or(Error::UnsupportedCurve {
                context: "Curve::from_str",
                id: 0,
            })
    }
}
