use parking_lot::RwLock;
use secp256k1::{PublicKey, SECP256K1, SecretKey};

/// Holds the checkpoint signing key once one has been found.
///
/// A node without the key can still verify checkpoints, it just can't sign new
/// ones. Shared between the bootstrap and whatever produces checkpoints.
#[derive(Debug, Default)]
pub struct MasterKeySlot {
    key: RwLock<Option<SecretKey>>,
}

impl MasterKeySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.key.read().is_some()
    }

    pub fn public_key(&self) -> Option<PublicKey> {
        self.key
            .read()
            .as_ref()
            .map(|sk| PublicKey::from_secret_key(SECP256K1, sk))
    }

    pub fn secret_key(&self) -> Option<SecretKey> {
        *self.key.read()
    }

    /// Registers `secret` as the signing key if it belongs to `expected`.
    ///
    /// Returns whether the key was registered.
    pub fn register(&self, secret: SecretKey, expected: &PublicKey) -> bool {
        if PublicKey::from_secret_key(SECP256K1, &secret) != *expected {
            return false;
        }
        *self.key.write() = Some(secret);
        true
    }

    pub fn clear(&self) {
        if let Some(mut sk) = self.key.write().take() {
            sk.non_secure_erase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_matching_key() {
        let slot = MasterKeySlot::new();
        let sk = SecretKey::from_slice(&[0x11; 32]).unwrap();
        let pk = PublicKey::from_secret_key(SECP256K1, &sk);

        assert!(!slot.is_set());
        assert!(slot.register(sk, &pk));
        assert!(slot.is_set());
        assert_eq!(slot.public_key(), Some(pk));
        assert_eq!(slot.secret_key(), Some(sk));

        slot.clear();
        assert!(!slot.is_set());
    }

    #[test]
    fn test_register_refuses_other_key() {
        let slot = MasterKeySlot::new();
        let sk = SecretKey::from_slice(&[0x11; 32]).unwrap();
        let other = SecretKey::from_slice(&[0x22; 32]).unwrap();
        let other_pk = PublicKey::from_secret_key(SECP256K1, &other);

        assert!(!slot.register(sk, &other_pk));
        assert!(!slot.is_set());
    }
}
