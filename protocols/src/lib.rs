//! Wire formats spoken by the direct (non-libc) resolver path.

pub mod dns;
