//! Shared utilities for nicpanel.

pub mod addr;

pub use addr::{is_ipv4, mask_prefix_len, parse_ipv4, same_subnet};
