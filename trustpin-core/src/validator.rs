// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server Trust Validator
//!
//! The pinning decision engine. Every challenge resolves to exactly one
//! verdict, and the verdict is `Cancel` unless an explicit pin match
//! promotes it: not a server-trust challenge, no presented chain, failed
//! baseline evaluation, missing leaf, failed key derivation, and pin
//! mismatch all reject. State is fixed at construction, so concurrent
//! challenges from multiple transport threads evaluate independently.

use rustls::pki_types::UnixTime;
use tracing::{debug, warn};

use crate::challenge::{
    AuthenticationMethod, ChallengeResponse, ServerTrustChallenge, ServerTrustCredential,
};
use crate::config::{PinningStrategy, ValidatorConfig};
use crate::error::PinningError;
use crate::eval::TrustEvaluator;
use crate::keys::{KeyExtractor, PinnedPublicKey};
use crate::policy::TrustPolicy;
use crate::store::{CertificateStore, PinnedCertificate};

/// Validates server trust challenges against a locally pinned set.
#[derive(Debug)]
pub struct ServerTrustValidator {
    strategy: PinningStrategy,
    evaluator: TrustEvaluator,
    extractor: KeyExtractor,
    pinned_certificates: Vec<PinnedCertificate>,
    pinned_keys: Vec<PinnedPublicKey>,
}

impl ServerTrustValidator {
    /// Builds a validator from configuration, loading the pinned set from
    /// the local resource bundle.
    pub fn new(config: ValidatorConfig) -> Result<Self, PinningError> {
        let store = CertificateStore::load(&config.bundle_dir, &config.certificate_locations);
        Self::with_store(store, config.strategy, config.policy)
    }

    /// Builds a validator over an already-loaded certificate store.
    pub fn with_store(
        store: CertificateStore,
        strategy: PinningStrategy,
        policy: TrustPolicy,
    ) -> Result<Self, PinningError> {
        let evaluator = TrustEvaluator::new(&policy)?;
        let extractor = KeyExtractor::new(&policy);

        // Derived once; the pinned set never changes afterwards.
        let pinned_keys = extractor.local_public_keys(&store);
        if strategy == PinningStrategy::PublicKey && pinned_keys.is_empty() {
            warn!("pinned key set is empty; every server trust challenge will be rejected");
        }

        Ok(ServerTrustValidator {
            strategy,
            evaluator,
            extractor,
            pinned_certificates: store.certificates().to_vec(),
            pinned_keys,
        })
    }

    /// The trust evaluator, for handshake-signature delegation.
    pub(crate) fn evaluator(&self) -> &TrustEvaluator {
        &self.evaluator
    }

    /// The strategy this validator pins with.
    pub fn strategy(&self) -> PinningStrategy {
        self.strategy
    }

    /// Number of pinned certificates loaded at construction.
    pub fn pinned_certificate_count(&self) -> usize {
        self.pinned_certificates.len()
    }

    /// Answers one authentication challenge.
    ///
    /// Always returns a response; the transport must abort the connection
    /// on [`Disposition::Cancel`] and use the returned credential as given
    /// on acceptance.
    ///
    /// [`Disposition::Cancel`]: crate::challenge::Disposition::Cancel
    pub fn on_server_trust_challenge(&self, challenge: &ServerTrustChallenge<'_>) -> ChallengeResponse {
        self.on_server_trust_challenge_at(challenge, UnixTime::now())
    }

    /// Answers one challenge with an explicit evaluation time.
    pub fn on_server_trust_challenge_at(
        &self,
        challenge: &ServerTrustChallenge<'_>,
        now: UnixTime,
    ) -> ChallengeResponse {
        if challenge.method() != AuthenticationMethod::ServerTrust {
            debug!("challenge is not server-trust authentication");
            return ChallengeResponse::cancel();
        }
        let Some(chain) = challenge.chain() else {
            debug!("server-trust challenge carries no chain");
            return ChallengeResponse::cancel();
        };

        // Baseline PKI check first; pins are never compared against an
        // already-untrusted chain.
        if !self.evaluator.validate_at(chain, now) {
            return ChallengeResponse::cancel();
        }

        let Some(leaf) = chain.end_entity() else {
            return ChallengeResponse::cancel();
        };

        let pinned = match self.strategy {
            PinningStrategy::Certificate => {
                self.pinned_certificates.iter().any(|pin| pin.matches(leaf))
            }
            PinningStrategy::PublicKey => match self.extractor.extract(leaf) {
                Some(server_key) => self.pinned_keys.contains(&server_key),
                None => false,
            },
        };

        if pinned {
            ChallengeResponse::use_credential(ServerTrustCredential::for_chain(chain))
        } else {
            debug!("server leaf matched no pin");
            ChallengeResponse::cancel()
        }
    }
}
