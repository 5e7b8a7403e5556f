//! Printable implementations for library types.

mod apply;
mod interface;
