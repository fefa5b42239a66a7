//! Typed literal parsing
//!
//! The grammar's character classes are looser than the literals they
//! capture (`999.1.1.1` is a valid `IpValue` span), so every typed capture is
//! validated here before it reaches the AST.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::template::error::{LiteralError, LiteralKind};

/// An IPv4 network in canonical form: host bits are always zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cidr {
    network: Ipv4Addr,
    prefix: u8,
}

impl Cidr {
    pub const MAX_PREFIX: u8 = 32;

    /// Builds the network containing `addr`, masking off the host bits
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Option<Self> {
        if prefix > Self::MAX_PREFIX {
            return None;
        }
        let mask = u32::MAX.checked_shl(u32::from(Self::MAX_PREFIX - prefix)).unwrap_or(0);
        Some(Self {
            network: Ipv4Addr::from(u32::from(addr) & mask),
            prefix,
        })
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

impl FromStr for Cidr {
    type Err = LiteralError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || LiteralError::new(LiteralKind::Cidr, text);

        let (addr, prefix) = text.split_once('/').ok_or_else(invalid)?;
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let addr = addr.parse::<Ipv4Addr>().map_err(|_| invalid())?;
        let prefix = prefix.parse::<u8>().map_err(|_| invalid())?;

        Cidr::new(addr, prefix).ok_or_else(invalid)
    }
}

pub fn parse_int(text: &str) -> Result<i64, LiteralError> {
    text.parse::<i64>()
        .map_err(|_| LiteralError::new(LiteralKind::Int, text))
}

pub fn parse_ip(text: &str) -> Result<Ipv4Addr, LiteralError> {
    text.parse::<Ipv4Addr>()
        .map_err(|_| LiteralError::new(LiteralKind::Ip, text))
}

pub fn parse_cidr(text: &str) -> Result<Cidr, LiteralError> {
    text.parse::<Cidr>()
}
