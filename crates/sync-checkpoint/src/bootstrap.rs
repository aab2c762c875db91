//! Finds the master signing key in the local wallet.

use std::str::FromStr;

use secp256k1::PublicKey;
use tracing::{debug, info, warn};

use crate::{
    resolver::ActivationResolver,
    signer::MasterKeySlot,
    wallet::{KeyLookup, Wallet},
};

/// Registers the wallet's key for the chain's master pubkey, if it has one.
///
/// Nothing here is an error. A chain without params, a wallet without the key
/// or an unusable key all leave the slot empty, and the caller tries again the
/// next time a checkpoint is created or received.
pub(crate) fn try_register_master_key<W: Wallet>(
    resolver: &ActivationResolver,
    slot: &MasterKeySlot,
    wallet: &W,
) {
    if slot.is_set() {
        return;
    }

    let Ok(params) = resolver.resolve_current() else {
        return;
    };

    let pubkey = match PublicKey::from_str(&params.master_pubkey) {
        Ok(pubkey) => pubkey,
        Err(err) => {
            warn!(master_pubkey = %params.master_pubkey, %err, "unparsable sync checkpoint master pubkey");
            return;
        }
    };

    let keys = wallet.lock_keys();
    let Some(secret) = keys.get_key(&pubkey) else {
        debug!(master_pubkey = %params.master_pubkey, "sync checkpoint master key not in wallet");
        return;
    };

    if slot.register(secret, &pubkey) {
        info!(master_pubkey = %params.master_pubkey, "sync checkpoint master key set");
    } else {
        warn!(master_pubkey = %params.master_pubkey, "wallet returned a key for another pubkey");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use secp256k1::{SECP256K1, SecretKey};
    use synchk_params::{ActivationParams, ActivationRegistry};
    use synchk_primitives::BlockHash;

    use super::*;
    use crate::{
        chain::ChainContext,
        wallet::{MemoryWallet, NoWallet},
    };

    fn master_sk() -> SecretKey {
        SecretKey::from_slice(&[0x11; 32]).unwrap()
    }

    fn resolver(chain: &str, master_pubkey: &str) -> ActivationResolver {
        let registry = ActivationRegistry::builder()
            .asset_chain("CCL", ActivationParams::new(1_700_000_000, master_pubkey))
            .build()
            .unwrap();
        let chain = ChainContext::from_chain_name(chain, false, BlockHash::zero());
        ActivationResolver::new(Arc::new(registry), chain)
    }

    fn master_pubkey_hex() -> String {
        PublicKey::from_secret_key(SECP256K1, &master_sk()).to_string()
    }

    #[test]
    fn test_registers_key_from_wallet() {
        let resolver = resolver("CCL", &master_pubkey_hex());
        let slot = MasterKeySlot::new();
        let wallet = MemoryWallet::new();
        let pk = wallet.insert(master_sk());

        try_register_master_key(&resolver, &slot, &wallet);
        assert_eq!(slot.public_key(), Some(pk));
    }

    #[test]
    fn test_key_missing_from_wallet() {
        let resolver = resolver("CCL", &master_pubkey_hex());
        let slot = MasterKeySlot::new();
        let wallet = MemoryWallet::new();
        wallet.insert(SecretKey::from_slice(&[0x22; 32]).unwrap());

        try_register_master_key(&resolver, &slot, &wallet);
        assert!(!slot.is_set());

        try_register_master_key(&resolver, &slot, &NoWallet);
        assert!(!slot.is_set());
    }

    #[test]
    fn test_existing_key_is_kept() {
        let resolver = resolver("CCL", &master_pubkey_hex());
        let slot = MasterKeySlot::new();
        let other = SecretKey::from_slice(&[0x22; 32]).unwrap();
        let other_pk = PublicKey::from_secret_key(SECP256K1, &other);
        assert!(slot.register(other, &other_pk));

        let wallet = MemoryWallet::new();
        wallet.insert(master_sk());
        try_register_master_key(&resolver, &slot, &wallet);
        assert_eq!(slot.public_key(), Some(other_pk));
    }

    #[test]
    fn test_chain_without_params() {
        let resolver = resolver("ZZZ", &master_pubkey_hex());
        let slot = MasterKeySlot::new();
        let wallet = MemoryWallet::new();
        wallet.insert(master_sk());

        try_register_master_key(&resolver, &slot, &wallet);
        assert!(!slot.is_set());
    }

    #[test]
    fn test_unparsable_master_pubkey() {
        let resolver = resolver("CCL", "not-a-pubkey");
        let slot = MasterKeySlot::new();
        let wallet = MemoryWallet::new();
        wallet.insert(master_sk());

        try_register_master_key(&resolver, &slot, &wallet);
        assert!(!slot.is_set());
    }
}
