use quad_check::ip::{MAX_LEN, MIN_LEN};
use quad_check::{check, validate, InvalidIp};

#[test]
fn well_known_addresses() {
    let cases = [
        ("192.168.0.1", true),
        ("255.255.255.255", true),
        ("0.0.0.0", true),
        ("256.256.256.256", false),
        ("192.168.1", false),
        ("192.168.01.1", false),
        ("192.168.0.0/24", false),
        ("not.an.ip", false),
        ("192.168.1.1 extra", false),
    ];

    for (ip, expected) in cases {
        assert_eq!(validate(ip), expected, "validate({:?})", ip);
    }
}

#[test]
fn leading_zeros() {
    assert!(validate("0.0.0.0"));
    assert!(validate("10.0.100.0"));
    assert!(!validate("00.0.0.0"));
    assert!(!validate("0.0.0.00"));
    assert!(!validate("1.2.3.007"));
    assert!(!validate("192.168.000.001"));
}

#[test]
fn octet_width_and_range() {
    assert!(!validate("1234.1.1.1"));
    assert!(!validate("1.1.1.1234"));
    assert!(!validate("256.1.1.1"));
    assert!(!validate("1.1.1.256"));
    assert!(!validate("999.0.0.0"));
    assert!(validate("249.250.251.199"));
}

#[test]
fn octet_count() {
    assert!(!validate("1.2.3"));
    assert!(!validate("1.2.3.4.5"));
    assert!(!validate("10.0.0.0.0"));
    assert!(validate("1.2.3.4"));
}

#[test]
fn empty_octets() {
    for ip in ["1..2.3.4", ".1.2.3.4", "1.2.3.4.", "123...456", "......."] {
        assert!(!validate(ip), "{:?} should be invalid", ip);
    }
}

#[test]
fn stray_characters() {
    for ip in [
        " 1.2.3.4",
        "1.2.3.4 ",
        "1.2.3.4\n",
        "1.2.+3.4",
        "1.2.-3.4",
        "1,2,3,4",
        "1.2.3.a",
        "1.2.3.٤",
        "１.２.３.４",
    ] {
        assert!(!validate(ip), "{:?} should be invalid", ip);
    }
}

#[test]
fn length_bounds() {
    assert_eq!(MIN_LEN, "0.0.0.0".len());
    assert_eq!(MAX_LEN, "255.255.255.255".len());

    assert!(!validate(""));
    assert!(!validate("0.0.0."));
    assert_eq!("0.0.0.".len(), MIN_LEN - 1);
    assert!(!validate("255.255.255.2555"));
    assert_eq!("255.255.255.2555".len(), MAX_LEN + 1);
    assert!(!validate("000000000000000000000000"));
}

#[test]
fn check_reports_a_single_error() {
    assert_eq!(check("8.8.8.8"), Ok(()));
    assert_eq!(check("8.8.8"), Err(InvalidIp));
    assert_eq!(check("08.8.8.8"), Err(InvalidIp));
    assert_eq!(InvalidIp.to_string(), "invalid IP");
}
