use iputil_common::error::AddressError;
use iputil_core::mask::{self, Netmask};
use iputil_core::{codec, completion, range};

/*************************************************************
                       Address codec
**************************************************************/

#[test]
fn ipv4_integer_round_trip() {
    for ip in ["10.0.0.1", "172.16.254.3", "192.168.100.200", "1.2.3.4", "255.255.255.0"] {
        let value = codec::to_integer(ip).unwrap();
        assert_eq!(codec::to_canonical_string(value), ip);
    }
}

#[test]
fn ipv6_integer_round_trip_is_canonical() {
    let cases = [
        ("FE80:0000:0000:0000:0250:56FF:FE8A:2ED2", "fe80::250:56ff:fe8a:2ed2"),
        ("2001:db8:0:0:1:0:0:1", "2001:db8::1:0:0:1"),
        ("fd00::aaf:d205", "fd00::aaf:d205"),
    ];
    for (input, canonical) in cases {
        let value = codec::to_integer(input).unwrap();
        assert_eq!(codec::to_canonical_string(value), canonical);
    }
}

#[test]
fn wrap_and_unwrap_are_inverse() {
    for s in ["10.0.0.1", "plain", "", "fe80::1", "::", "a:b"] {
        assert_eq!(codec::unwrap(&codec::wrap(s)), s);
    }
    for s in ["10.0.0.1", "no-colons-here"] {
        assert_eq!(codec::wrap(s), s);
        assert_eq!(codec::unwrap(s), s);
    }
}

#[test]
fn wrapped_addresses_validate() {
    let wrapped = codec::wrap("fd00::aaf:d205");
    assert!(codec::is_address(&wrapped));
    assert_eq!(codec::to_integer(&wrapped), codec::to_integer("fd00::aaf:d205"));
}

#[test]
fn bytes_to_ipv6() {
    let octets: Vec<String> = [253, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10, 175, 210, 5]
        .iter()
        .map(|b: &u8| b.to_string())
        .collect();
    assert_eq!(codec::bytes_to_canonical_ipv6(&octets), "fd00::aaf:d205");
    assert_eq!(codec::bytes_to_canonical_ipv6(&["hello", "world"]), "");
}

/*************************************************************
                         Netmasks
**************************************************************/

#[test]
fn mask_properties() {
    let dotted = |s: &str| Netmask::Dotted(s.to_string());
    assert_eq!(mask::mask_to_bits(&dotted("255.255.255.255")), Ok(Some(32)));
    assert_eq!(mask::mask_to_bits(&dotted("0.0.0.0")), Ok(Some(0)));
    assert_eq!(mask::mask_to_bits(&dotted("255.255.224.0")), Ok(Some(19)));
    assert_eq!(mask::bits_to_mask(12).unwrap(), "255.240.0.0");
    assert_eq!(mask::bits_to_mask(32).unwrap(), "255.255.255.255");
    assert_eq!(mask::hex_to_mask("0xffffff00").unwrap(), "255.255.255.0");
    assert_eq!(mask::hex_to_mask("trash").unwrap(), "255.255.255.255");
}

#[test]
fn mask_forms_agree() {
    let from_bits = mask::bits_to_decimal_mask(20).unwrap();
    let dotted = mask::bits_to_mask(20).unwrap();
    let from_dotted = codec::to_integer(&dotted).unwrap();
    let from_hex = codec::to_integer(&mask::hex_to_mask("0xfffff000").unwrap()).unwrap();
    assert_eq!(from_bits as u128, from_dotted);
    assert_eq!(from_dotted, from_hex);
}

#[test]
fn network_address_with_every_mask_form() {
    let address = "10.12.25.33";
    let by_bits = mask::network_address_string(address, &"24".parse().unwrap()).unwrap();
    let by_dotted =
        mask::network_address_string(address, &"255.255.255.0".parse().unwrap()).unwrap();
    assert_eq!(by_bits, "10.12.25.0");
    assert_eq!(by_bits, by_dotted);
    assert_eq!(
        mask::network_address_string(address, &Netmask::Bits(32)).unwrap(),
        "10.12.25.33"
    );
}

/*************************************************************
                    Ranges and completion
**************************************************************/

#[test]
fn range_properties() {
    assert_eq!(
        range::expand("10.0.0.1-5").unwrap(),
        ["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5"]
    );
    assert_eq!(range::expand("10.0.0.1").unwrap(), ["10.0.0.1"]);
    assert!(matches!(
        range::expand("10.0.0.1-2-3"),
        Err(AddressError::InvalidRange(_))
    ));
}

#[test]
fn range_output_is_ascending_and_unique() {
    let addresses = range::expand("192.168.1.250-192.168.2.5").unwrap();
    let values: Vec<u128> = addresses.iter().map(|a| codec::to_integer(a).unwrap()).collect();
    assert_eq!(values.len(), 12);
    assert!(values.windows(2).all(|pair| pair[1] == pair[0] + 1));
}

#[test]
fn subnet_bounds_properties() {
    let bounds = |ip: &str| {
        let (low, high) = range::subnet_bounds(ip).unwrap();
        (codec::to_canonical_string(low), codec::to_canonical_string(high))
    };
    assert_eq!(bounds("10.1.1.0"), ("10.1.1.0".to_string(), "10.1.1.255".to_string()));
    assert_eq!(bounds("10.1.1.1"), ("10.1.1.1".to_string(), "10.1.1.1".to_string()));
    assert_eq!(bounds("0.0.0.0"), ("0.0.0.0".to_string(), "255.255.255.255".to_string()));
}

#[test]
fn subnet_bounds_match_expansion() {
    let (low, high) = range::subnet_bounds("10.9.8.0").unwrap();
    let expr = format!(
        "{}-{}",
        codec::to_canonical_string(low),
        codec::to_canonical_string(high)
    );
    assert_eq!(range::expand(&expr).unwrap().len(), 256);
}

#[test]
fn completion_properties() {
    assert_eq!(completion::complete("20"), "20.0.0.0");
    assert_eq!(completion::complete("10.175.X"), "10.175.0.0");
    assert!(codec::is_address(&completion::complete("192.168.")));
}
