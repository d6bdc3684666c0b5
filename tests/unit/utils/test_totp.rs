use degiro_client::error::AppError;
use degiro_client::utils::totp::{decode_base32, generate_totp, generate_totp_at};

// base32 of the ASCII seed "12345678901234567890" used by RFC 6238
const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

#[test]
fn test_decode_rfc_secret() {
    assert_eq!(decode_base32(RFC_SECRET).unwrap(), b"12345678901234567890");
}

#[test]
fn test_totp_rfc6238_sha1_vectors() {
    assert_eq!(generate_totp_at(RFC_SECRET, 59).unwrap(), 287082);
    assert_eq!(generate_totp_at(RFC_SECRET, 1111111109).unwrap(), 81804);
    assert_eq!(generate_totp_at(RFC_SECRET, 1111111111).unwrap(), 50471);
    assert_eq!(generate_totp_at(RFC_SECRET, 1234567890).unwrap(), 5924);
    assert_eq!(generate_totp_at(RFC_SECRET, 2000000000).unwrap(), 279037);
}

#[test]
fn test_totp_same_window_same_code() {
    assert_eq!(
        generate_totp_at(RFC_SECRET, 60).unwrap(),
        generate_totp_at(RFC_SECRET, 89).unwrap()
    );
}

#[test]
fn test_totp_lowercase_secret_with_spaces() {
    let spaced = "gezd gnbv gy3t qojq gezd gnbv gy3t qojq";
    assert_eq!(generate_totp_at(spaced, 59).unwrap(), 287082);
}

#[test]
fn test_totp_now_has_six_digits_at_most() {
    let code = generate_totp(RFC_SECRET).unwrap();
    assert!(code < 1_000_000);
}

#[test]
fn test_totp_invalid_secret() {
    assert!(matches!(
        generate_totp_at("not base32!", 59),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        generate_totp_at("", 59),
        Err(AppError::InvalidInput(_))
    ));
}
