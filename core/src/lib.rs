//! # iputil core
//!
//! Address arithmetic for IPv4 and IPv6 plus a non-blocking resolver facade.
//!
//! * **[`codec`]**: string, integer and wrapped-identifier conversions.
//! * **[`mask`]**: netmask and network-address math.
//! * **[`range`]**: range expressions and subnet bounds.
//! * **[`completion`]**: repair of partially typed dotted-quads.
//! * **[`resolver`]**: forward and reverse lookups off the caller's task.
//!
//! Everything except [`resolver`] is pure and synchronous.

pub mod codec;
pub mod completion;
pub mod mask;
pub mod range;
pub mod resolver;
