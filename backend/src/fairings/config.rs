use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use jsonwebtoken::{DecodingKey, EncodingKey};

/// The keys used to verify admin Bearer tokens. Token issuance is the
/// identity provider's job; this server only ever decodes.
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_base64(secret: &str) -> Self {
        let secret = STANDARD.decode(secret).expect("Invalid base64 JWT secret");
        let encoding = EncodingKey::from_secret(&secret);
        let decoding = DecodingKey::from_secret(&secret);
        Self { encoding, decoding }
    }
}
