//! IPv4 address parsing and subnet utilities.

use std::net::Ipv4Addr;

/// Error type for address parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid netmask: {0}")]
    InvalidMask(String),
}

pub type Result<T> = std::result::Result<T, AddrError>;

/// Parse a dotted-quad IPv4 address.
///
/// Strict: four decimal octets, each 0..=255, no leading zeros, no
/// surrounding whitespace.
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr> {
    s.parse()
        .map_err(|_| AddrError::InvalidAddress(s.to_string()))
}

/// Check whether `s` is a strict dotted-quad IPv4 address.
pub fn is_ipv4(s: &str) -> bool {
    parse_ipv4(s).is_ok()
}

/// Prefix length of a dotted-quad netmask.
///
/// Fails for anything that is not an address or not a contiguous run of
/// one bits followed by zero bits.
pub fn mask_prefix_len(mask: &str) -> Result<u8> {
    let bits = u32::from(parse_ipv4(mask).map_err(|_| AddrError::InvalidMask(mask.to_string()))?);
    let ones = bits.leading_ones();
    if bits.checked_shl(ones).unwrap_or(0) != 0 {
        return Err(AddrError::InvalidMask(mask.to_string()));
    }
    Ok(ones as u8)
}

/// Check if an IPv4 address is in a given prefix.
pub fn ipv4_in_prefix(addr: Ipv4Addr, prefix_addr: Ipv4Addr, prefix_len: u8) -> bool {
    if prefix_len == 0 {
        return true;
    }
    if prefix_len > 32 {
        return false;
    }

    let mask = !0u32 << (32 - prefix_len);
    let addr_bits = u32::from(addr);
    let prefix_bits = u32::from(prefix_addr);

    (addr_bits & mask) == (prefix_bits & mask)
}

/// Check whether `gw` lies in the network formed by `ip` and `mask`.
///
/// Any parse failure, a non-contiguous mask included, yields `false`.
pub fn same_subnet(ip: &str, mask: &str, gw: &str) -> bool {
    let (Ok(ip), Ok(prefix_len), Ok(gw)) = (parse_ipv4(ip), mask_prefix_len(mask), parse_ipv4(gw))
    else {
        return false;
    };
    ipv4_in_prefix(gw, ip, prefix_len)
}
