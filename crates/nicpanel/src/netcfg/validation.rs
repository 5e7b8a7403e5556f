//! Validation of staged static configurations.
//!
//! Validation runs before any command touches the host, so a rejected
//! change leaves the interface exactly as it was.
//!
//! # Example
//!
//! ```rust
//! use nicpanel::netcfg::StagedChange;
//! use nicpanel::netcfg::validation::{Validatable, ValidationError};
//!
//! let change = StagedChange::static_ipv4("Ethernet", "1.2.3.4", "255.255.255.0")
//!     .gateway("9.9.9.9");
//!
//! assert!(matches!(
//!     change.validate(),
//!     Err(ValidationError::GatewayOutsideSubnet { .. })
//! ));
//! ```

use super::config::{Mode, StagedChange};
use crate::util::addr::{is_ipv4, mask_prefix_len, same_subnet};

/// A staged static configuration that breaks a networking rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The interface name cannot be passed to the tool.
    #[error("invalid interface name: {0:?}")]
    InvalidName(String),

    /// A field that must be a dotted-quad IPv4 address is not.
    #[error("invalid {field}: {value:?} is not an IPv4 address")]
    InvalidAddress {
        /// Which field (`ip address`, `subnet mask`, `default gateway`).
        field: &'static str,
        value: String,
    },

    /// The mask is an address but not a contiguous netmask.
    #[error("invalid subnet mask: {0} is not a contiguous netmask")]
    InvalidMask(String),

    /// The gateway is outside the network formed by address and mask.
    #[error("gateway {gateway} is not in the same subnet as {ip}/{mask}")]
    GatewayOutsideSubnet {
        gateway: String,
        ip: String,
        mask: String,
    },

    /// A DNS server entry is not an IPv4 address.
    #[error("invalid DNS server: {0:?} is not an IPv4 address")]
    InvalidDns(String),
}

impl ValidationError {
    /// The staged field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "name",
            Self::InvalidAddress { field, .. } => field,
            Self::InvalidMask(_) => "subnet mask",
            Self::GatewayOutsideSubnet { .. } => "default gateway",
            Self::InvalidDns(_) => "dns",
        }
    }
}

/// Trait for types that can be checked before they reach the host.
pub trait Validatable {
    /// Validate this configuration, reporting the first broken rule.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Check if this configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Validatable for StagedChange {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_static(self)
    }
}

/// Validate an interface name.
///
/// The name travels inside `name="..."`, so it must be non-empty and free
/// of double quotes and line breaks.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || name.contains(['"', '\r', '\n']) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn require_ipv4(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value {
        Some(v) if is_ipv4(v) => Ok(v.to_string()),
        other => Err(ValidationError::InvalidAddress {
            field,
            value: other.unwrap_or_default().to_string(),
        }),
    }
}

/// Check a staged change before it is applied.
///
/// A no-op for [`Mode::Dhcp`]: the static fields are never looked at.
/// For [`Mode::Static`] the address and mask must be IPv4, the mask
/// contiguous, a gateway (if any) IPv4 and inside the address's subnet,
/// and every DNS entry IPv4.
pub fn validate_static(staged: &StagedChange) -> Result<(), ValidationError> {
    if staged.mode != Mode::Static {
        return Ok(());
    }

    validate_name(staged.name())?;

    let ip = require_ipv4("ip address", staged.ip_addr())?;
    let mask = require_ipv4("subnet mask", staged.netmask())?;
    if mask_prefix_len(&mask).is_err() {
        return Err(ValidationError::InvalidMask(mask));
    }

    if let Some(gw) = staged.gateway_addr() {
        if !is_ipv4(gw) {
            return Err(ValidationError::InvalidAddress {
                field: "default gateway",
                value: gw.to_string(),
            });
        }
        if !same_subnet(&ip, &mask, gw) {
            return Err(ValidationError::GatewayOutsideSubnet {
                gateway: gw.to_string(),
                ip,
                mask,
            });
        }
    }

    if let Some(bad) = staged.dns_servers().into_iter().find(|s| !is_ipv4(s)) {
        return Err(ValidationError::InvalidDns(bad.to_string()));
    }

    Ok(())
}
