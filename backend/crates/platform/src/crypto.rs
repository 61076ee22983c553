//! Cryptographic Utilities
//!
//! HMAC-SHA256 signing and unpadded URL-safe Base64.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as unpadded URL-safe base64
pub fn to_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded URL-safe base64 to bytes
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(s)
}

/// Compute HMAC-SHA256
///
/// ## Arguments
/// * `key` - 任意長の秘密鍵
/// * `data` - 署名対象
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// HMAC-SHA256 署名を定数時間で検証
pub fn verify_hmac_sha256(key: &[u8], data: &[u8], signature: &[u8]) -> bool {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.verify_slice(signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_rfc4231_case_2() {
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_hmac_key_sensitivity() {
        let data = b"header.payload";
        assert_ne!(hmac_sha256(b"secret-a", data), hmac_sha256(b"secret-b", data));
    }

    #[test]
    fn test_verify_hmac() {
        let sig = hmac_sha256(b"key", b"message");
        assert!(verify_hmac_sha256(b"key", b"message", &sig));
        assert!(!verify_hmac_sha256(b"key", b"messagf", &sig));
        assert!(!verify_hmac_sha256(b"key", b"message", &sig[..31]));
    }

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_base64url_has_no_padding_or_unsafe_chars() {
        let encoded = to_base64url(&[0xfb, 0xff, 0xfe, 0x01]);
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(from_base64url(&encoded).unwrap(), vec![0xfb, 0xff, 0xfe, 0x01]);
    }

    #[test]
    fn test_base64url_rejects_garbage() {
        assert!(from_base64url("not base64!").is_err());
    }
}
