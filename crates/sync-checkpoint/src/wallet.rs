//! Wallet access needed to find the master signing key.

use std::collections::HashMap;

use parking_lot::{Mutex, MutexGuard};
use secp256k1::{PublicKey, SECP256K1, SecretKey};

/// Key lookup against a locked wallet.
pub trait KeyLookup {
    fn get_key(&self, pubkey: &PublicKey) -> Option<SecretKey>;
}

/// A wallet whose keys are only reachable while holding its lock.
pub trait Wallet: Send + Sync {
    type Keys<'a>: KeyLookup
    where
        Self: 'a;

    /// Takes the wallet lock, released when the returned guard drops.
    fn lock_keys(&self) -> Self::Keys<'_>;

    /// Finds the secret key for `pubkey`, holding the wallet lock only for the
    /// lookup.
    fn find_key_for_pubkey(&self, pubkey: &PublicKey) -> Option<SecretKey> {
        self.lock_keys().get_key(pubkey)
    }
}

/// Stand-in for a node running without a wallet. Never has a key.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoWallet;

impl KeyLookup for NoWallet {
    fn get_key(&self, _pubkey: &PublicKey) -> Option<SecretKey> {
        None
    }
}

impl Wallet for NoWallet {
    type Keys<'a> = NoWallet;

    fn lock_keys(&self) -> Self::Keys<'_> {
        NoWallet
    }
}

/// Wallet keeping its keys in memory.
#[derive(Debug, Default)]
pub struct MemoryWallet {
    keys: Mutex<HashMap<PublicKey, SecretKey>>,
}

impl MemoryWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a wallet from hex encoded secret keys.
    pub fn from_hex_keys<'a>(
        keys: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, secp256k1::Error> {
        let wallet = Self::new();
        for key in keys {
            wallet.insert(key.trim().parse()?);
        }
        Ok(wallet)
    }

    /// Adds a key, returning its public key.
    pub fn insert(&self, secret: SecretKey) -> PublicKey {
        let pubkey = PublicKey::from_secret_key(SECP256K1, &secret);
        self.keys.lock().insert(pubkey, secret);
        pubkey
    }

    pub fn len(&self) -> usize {
        self.keys.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.lock().is_empty()
    }
}

/// Locked view of a [`MemoryWallet`].
#[derive(Debug)]
pub struct MemoryWalletKeys<'a> {
    keys: MutexGuard<'a, HashMap<PublicKey, SecretKey>>,
}

impl KeyLookup for MemoryWalletKeys<'_> {
    fn get_key(&self, pubkey: &PublicKey) -> Option<SecretKey> {
        self.keys.get(pubkey).copied()
    }
}

impl Wallet for MemoryWallet {
    type Keys<'a> = MemoryWalletKeys<'a>;

    fn lock_keys(&self) -> Self::Keys<'_> {
        MemoryWalletKeys {
            keys: self.keys.lock(),
        }
    }
}
