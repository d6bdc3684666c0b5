/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Time-based one-time passwords (RFC 6238) for the two-factor login.
//!
//! DEGIRO hands out the TOTP seed as a base32 string, the same one an
//! authenticator app would scan. Codes use HMAC-SHA1, a 30 second step and
//! six digits.

use crate::constants::{TOTP_DIGITS, TOTP_STEP_SECS};
use crate::error::AppError;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Decodes an RFC 4648 base32 string
///
/// Lowercase letters, spaces, dashes and `=` padding are accepted.
///
/// # Errors
/// `AppError::InvalidInput` if the string contains a character outside the alphabet
/// or decodes to nothing.
pub fn decode_base32(input: &str) -> Result<Vec<u8>, AppError> {
    let mut output = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u8;

    for c in input.chars() {
        if c == '=' || c == ' ' || c == '-' {
            continue;
        }
        let invalid = || AppError::InvalidInput(format!("invalid base32 character '{c}'"));
        if !c.is_ascii() {
            return Err(invalid());
        }
        let upper = c.to_ascii_uppercase() as u8;
        let value = BASE32_ALPHABET
            .iter()
            .position(|&b| b == upper)
            .ok_or_else(invalid)?;

        buffer = (buffer << 5) | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    if output.is_empty() {
        return Err(AppError::InvalidInput("empty base32 secret".to_string()));
    }
    Ok(output)
}

/// Computes the one-time password for a raw key and a counter value (RFC 4226)
fn hotp(key: &[u8], counter: u64) -> Result<u32, AppError> {
    let mut mac = HmacSha1::new_from_slice(key)
        .map_err(|e| AppError::InvalidInput(format!("invalid TOTP key: {e}")))?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let code = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);
    Ok(code % 10u32.pow(TOTP_DIGITS))
}

/// Generates the one-time password for a base32 secret at the given unix time
///
/// # Errors
/// `AppError::InvalidInput` when the secret is not valid base32.
pub fn generate_totp_at(secret: &str, unix_time: u64) -> Result<u32, AppError> {
    let key = decode_base32(secret)?;
    hotp(&key, unix_time / TOTP_STEP_SECS)
}

/// Generates the one-time password for a base32 secret at the current time
pub fn generate_totp(secret: &str) -> Result<u32, AppError> {
    let now = Utc::now().timestamp().max(0) as u64;
    generate_totp_at(secret, now)
}
