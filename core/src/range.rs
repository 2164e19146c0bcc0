//! # Address Ranges
//!
//! Expands compact range expressions into explicit address lists and infers
//! subnet bounds from "round" addresses.
//!
//! Supported range expressions:
//! * a single address: `10.0.0.1`
//! * an address and a count: `10.0.0.1-5` (five addresses starting at `.1`)
//! * two full addresses: `10.0.0.1-10.0.0.5` or `fd00::1-fd00::3`

use std::net::IpAddr;

use iputil_common::error::AddressError;

use crate::codec;

/// A contiguous run of `count` addresses beginning at `start_addr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressRange {
    pub start_addr: IpAddr,
    pub count: u128,
}

impl AddressRange {
    pub fn new(start_addr: IpAddr, count: u128) -> Self {
        Self { start_addr, count }
    }

    /// Inclusive range between two addresses, in ascending order whichever
    /// comes first.
    ///
    /// Fails if the range covers the whole 128-bit space, whose size does
    /// not fit in the count.
    pub fn between(a: IpAddr, b: IpAddr) -> Option<Self> {
        let (a_num, b_num) = (codec::addr_to_u128(&a), codec::addr_to_u128(&b));
        let (start_addr, low, high) = if a_num <= b_num {
            (a, a_num, b_num)
        } else {
            (b, b_num, a_num)
        };
        let count = (high - low).checked_add(1)?;
        Some(Self { start_addr, count })
    }

    pub fn len(&self) -> u128 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Walks the range in ascending order, keeping the family of the first
    /// address.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = IpAddr> + Clone {
        let start: u128 = codec::addr_to_u128(&self.start_addr);
        let is_v4: bool = self.start_addr.is_ipv4();
        (0..self.count).map(move |offset| {
            let value = start + offset;
            match (is_v4, u32::try_from(value)) {
                (true, Ok(v4)) => IpAddr::V4(v4.into()),
                _ => IpAddr::V6(value.into()),
            }
        })
    }
}

/// Parses a range expression without materialising its addresses.
///
/// A bare address becomes a one-element range.
pub fn parse_range(range: &str) -> Result<AddressRange, AddressError> {
    let parts: Vec<&str> = range.split('-').collect();
    let (begin_str, end_str) = match parts.as_slice() {
        [single] => {
            let addr = codec::parse(single)?;
            return Ok(AddressRange::new(addr, 1));
        }
        [begin, end] => (*begin, *end),
        _ => return Err(AddressError::InvalidRange(range.to_string())),
    };

    let begin: IpAddr = codec::parse(begin_str)?;

    if let Ok(count) = end_str.trim().parse::<u128>() {
        let last_needed = codec::addr_to_u128(&begin).checked_add(count);
        let fits = match (begin, last_needed) {
            (_, None) => false,
            (IpAddr::V4(_), Some(end)) => end <= u32::MAX as u128 + 1,
            (IpAddr::V6(_), Some(_)) => true,
        };
        if !fits {
            return Err(AddressError::InvalidRange(range.to_string()));
        }
        return Ok(AddressRange::new(begin, count));
    }

    let end: IpAddr = codec::parse(end_str)
        .map_err(|_| AddressError::InvalidRangeEnd(end_str.to_string()))?;

    AddressRange::between(begin, end).ok_or_else(|| AddressError::InvalidRange(range.to_string()))
}

/// Largest range `expand` will materialise, the size of a `/8`.
/// Use [`parse_range`] to walk bigger ranges lazily.
pub const MAX_EXPANDED_LEN: u128 = 1 << 24;

/// Expands a range expression into its addresses.
///
/// ```
/// use iputil_core::range::expand;
/// assert_eq!(expand("10.0.0.1-3").unwrap(), ["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
/// ```
///
/// A bare address is returned as given, without validation. Addresses keep
/// the family of the left endpoint, so `::1-2` yields `::1` and `::2` where
/// `to_canonical_string` would print `0.0.0.1` and `0.0.0.2`. Ranges longer
/// than [`MAX_EXPANDED_LEN`] fail with `InvalidRange`.
pub fn expand(expr: &str) -> Result<Vec<String>, AddressError> {
    if !expr.contains('-') {
        return Ok(vec![expr.to_string()]);
    }
    let range = parse_range(expr)?;
    if range.len() > MAX_EXPANDED_LEN {
        return Err(AddressError::InvalidRange(expr.to_string()));
    }
    Ok(range.iter().map(|addr| addr.to_string()).collect())
}

/// Infers the integer bounds of the subnet that `ip` is the base of.
///
/// Trailing `0` components widen the subnet: `10.1.1.0` spans
/// `10.1.1.0..=10.1.1.255`, `10.0.0.0` spans `10.0.0.0..=10.255.255.255`,
/// while `10.1.1.1` is a single address. A zero followed by a non-zero
/// component does not count.
pub fn subnet_bounds(ip: &str) -> Result<(u128, u128), AddressError> {
    let mut octets: Vec<&str> = ip.split('.').collect();
    let mut other_end: Vec<&str> = Vec::new();

    while let Some(octet) = octets.pop() {
        if octet == "0" {
            other_end.push("255");
        } else {
            other_end.push(octet);
            break;
        }
    }

    other_end.reverse();
    octets.extend(other_end);
    let upper: String = octets.join(".");

    Ok((codec::to_integer(ip)?, codec::to_integer(&upper)?))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn bounds_str(ip: &str) -> (String, String) {
        let (low, high) = subnet_bounds(ip).unwrap();
        (codec::to_canonical_string(low), codec::to_canonical_string(high))
    }

    fn owned(bounds: (&str, &str)) -> (String, String) {
        (bounds.0.to_string(), bounds.1.to_string())
    }

    #[test]
    fn test_expand_count() {
        assert_eq!(
            expand("10.0.0.1-5").unwrap(),
            ["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5"]
        );
    }

    #[test]
    fn test_expand_single() {
        assert_eq!(expand("10.0.0.1").unwrap(), ["10.0.0.1"]);
        assert_eq!(expand("fd00::1").unwrap(), ["fd00::1"]);
    }

    #[test]
    fn test_expand_too_many_dashes() {
        assert_eq!(
            expand("10.0.0.1-2-3"),
            Err(AddressError::InvalidRange("10.0.0.1-2-3".into()))
        );
    }

    #[test]
    fn test_expand_ipv6_count_and_full() {
        let expected = ["fd00::aaf:d201", "fd00::aaf:d202", "fd00::aaf:d203"];
        assert_eq!(expand("fd00::aaf:d201-3").unwrap(), expected);
        assert_eq!(expand("fd00::aaf:d201-fd00::aaf:d203").unwrap(), expected);
    }

    #[test]
    fn test_expand_full_addresses() {
        assert_eq!(
            expand("10.0.0.254-10.0.1.1").unwrap(),
            ["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]
        );
    }

    #[test]
    fn test_expand_reversed_is_ascending() {
        assert_eq!(
            expand("10.0.0.3-10.0.0.1").unwrap(),
            ["10.0.0.1", "10.0.0.2", "10.0.0.3"]
        );
    }

    #[test]
    fn test_expand_zero_count_is_empty() {
        assert!(expand("10.0.0.1-0").unwrap().is_empty());
    }

    #[test]
    fn test_expand_bad_begin() {
        assert_eq!(
            expand("10.0.0.300-5"),
            Err(AddressError::InvalidAddress("10.0.0.300".into()))
        );
    }

    #[test]
    fn test_expand_bad_end() {
        assert_eq!(
            expand("10.0.0.1-foo"),
            Err(AddressError::InvalidRangeEnd("foo".into()))
        );
        assert_eq!(expand("10.0.0.1-"), Err(AddressError::InvalidRangeEnd("".into())));
    }

    #[test]
    fn test_expand_past_end_of_ipv4() {
        assert!(matches!(
            expand("255.255.255.250-10"),
            Err(AddressError::InvalidRange(_))
        ));
        assert_eq!(expand("255.255.255.254-2").unwrap(), ["255.255.255.254", "255.255.255.255"]);
    }

    #[test]
    fn test_expand_ipv6_keeps_family() {
        assert_eq!(expand("::1-2").unwrap(), ["::1", "::2"]);
    }

    #[test]
    fn test_expand_refuses_oversized_ranges() {
        assert_eq!(
            expand("::-ffff::"),
            Err(AddressError::InvalidRange("::-ffff::".to_string()))
        );
        assert_eq!(
            expand("fd00::-4000000000"),
            Err(AddressError::InvalidRange("fd00::-4000000000".to_string()))
        );
        assert!(matches!(expand("0.0.0.0-4294967296"), Err(AddressError::InvalidRange(_))));

        let limit = format!("10.0.0.0-{}", MAX_EXPANDED_LEN + 1);
        assert!(matches!(expand(&limit), Err(AddressError::InvalidRange(_))));
        assert_eq!(parse_range(&limit).unwrap().len(), MAX_EXPANDED_LEN + 1);
    }

    #[test]
    fn test_parse_range_lazy() {
        let range = parse_range("::-ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe").unwrap();
        assert_eq!(range.len(), u128::MAX);
        assert_eq!(range.iter().next(), Some(IpAddr::V6(Ipv6Addr::UNSPECIFIED)));
        assert!(parse_range("::-ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff").is_err());
    }

    #[test]
    fn test_parse_range_single_validates() {
        let range = parse_range("10.0.0.1").unwrap();
        assert_eq!(range.len(), 1);
        assert!(parse_range("nope").is_err());
    }

    #[test]
    fn test_range_iter_double_ended() {
        let range = AddressRange::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 3);
        let mut iter = range.iter();
        assert_eq!(iter.next_back(), Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 3))));
        assert_eq!(iter.next(), Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
        assert_eq!(iter.next_back(), Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_range_empty() {
        let range = AddressRange::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 0);
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
    }

    #[test]
    fn test_subnet_bounds() {
        assert_eq!(bounds_str("10.1.1.0"), owned(("10.1.1.0", "10.1.1.255")));
        assert_eq!(bounds_str("10.1.1.1"), owned(("10.1.1.1", "10.1.1.1")));
        assert_eq!(bounds_str("10.0.1.0"), owned(("10.0.1.0", "10.0.1.255")));
        assert_eq!(bounds_str("0.0.0.0"), owned(("0.0.0.0", "255.255.255.255")));
        assert_eq!(bounds_str("10.0.0.0"), owned(("10.0.0.0", "10.255.255.255")));
        assert_eq!(bounds_str("100.0.0.0"), owned(("100.0.0.0", "100.255.255.255")));
    }

    #[test]
    fn test_subnet_bounds_ipv4_embedded() {
        assert_eq!(bounds_str("::100.0.0.0"), owned(("100.0.0.0", "100.255.255.255")));
    }

    #[test]
    fn test_subnet_bounds_invalid() {
        assert!(subnet_bounds("10.1.1").is_err());
        assert!(subnet_bounds("not.an.ip.0").is_err());
    }
}
