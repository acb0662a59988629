// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Public Key Extraction
//!
//! Derives pinnable public keys from certificates. A certificate alone
//! does not yield a usable key: the extractor first constructs a minimal
//! trust view of the single certificate (a strict full parse, plus the
//! policy's algorithm gate) and only then copies the key material out.
//! Extraction failure is an absence, never an error - malformed or
//! policy-incompatible entries simply contribute no key.

use rustls::pki_types::CertificateDer;
use tracing::debug;
use x509_parser::prelude::*;

use crate::policy::TrustPolicy;
use crate::store::CertificateStore;

/// A public key derived from a certificate for pinning comparison.
///
/// Two keys are equal iff their key material is equal: the algorithm
/// identifier plus the encoded SubjectPublicKeyInfo bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedPublicKey {
    algorithm_oid: String,
    spki_der: Vec<u8>,
}

impl PinnedPublicKey {
    /// Dotted OID of the key algorithm, e.g. `"1.2.840.10045.2.1"`.
    pub fn algorithm_oid(&self) -> &str {
        &self.algorithm_oid
    }

    /// The raw SubjectPublicKeyInfo DER this key compares by.
    pub fn spki_der(&self) -> &[u8] {
        &self.spki_der
    }
}

/// Derives public keys from certificates under a fixed trust policy.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    policy: TrustPolicy,
}

impl KeyExtractor {
    /// Creates an extractor bound to the validator's trust policy.
    pub fn new(policy: &TrustPolicy) -> Self {
        KeyExtractor {
            policy: policy.clone(),
        }
    }

    /// Extracts the public key from one DER certificate.
    ///
    /// Returns `None` if the certificate does not parse as exactly one
    /// well-formed X.509 certificate, or if its key algorithm is not
    /// evaluable under the policy.
    pub fn extract(&self, der: &CertificateDer<'_>) -> Option<PinnedPublicKey> {
        let (rem, cert) = X509Certificate::from_der(der.as_ref()).ok()?;
        if !rem.is_empty() {
            return None;
        }

        let spki = cert.public_key();
        let algorithm_oid = spki.algorithm.algorithm.to_id_string();
        if !self.policy.supports_key_algorithm(&algorithm_oid) {
            debug!(algorithm = %algorithm_oid, "key algorithm not evaluable under policy");
            return None;
        }

        Some(PinnedPublicKey {
            algorithm_oid,
            spki_der: spki.raw.to_vec(),
        })
    }

    /// Derives the pinned key set from every certificate in the store,
    /// discarding entries that yield no key.
    pub fn local_public_keys(&self, store: &CertificateStore) -> Vec<PinnedPublicKey> {
        store
            .certificates()
            .iter()
            .filter_map(|pin| {
                let key = self.extract(pin.der());
                if key.is_none() {
                    debug!(
                        fingerprint = %pin.fingerprint_hex(),
                        "pinned certificate yielded no public key"
                    );
                }
                key
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustls::RootCertStore;

    fn extractor() -> KeyExtractor {
        let policy = TrustPolicy::tls_server(RootCertStore::empty(), "example.com").unwrap();
        KeyExtractor::new(&policy)
    }

    #[test]
    fn garbage_yields_no_key() {
        let der = CertificateDer::from(b"definitely not DER".to_vec());
        assert!(extractor().extract(&der).is_none());
    }

    #[test]
    fn empty_store_yields_empty_key_set() {
        let keys = extractor().local_public_keys(&CertificateStore::default());
        assert!(keys.is_empty());
    }
}
