/// One-way salted hash of a plaintext password. The work factor is
/// configurable via SALT_ROUNDS; bcrypt embeds the salt in the hash.
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}
