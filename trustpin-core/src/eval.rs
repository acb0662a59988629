// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Trust Evaluation
//!
//! Baseline PKI validation of a presented chain: signature chain to the
//! policy's anchors, validity window, and server name. This is the
//! gatekeeper pinning supplements, not replaces - a chain that fails here
//! never reaches the pin comparison. Pin membership is not inspected.

use std::sync::Arc;

use rustls::client::danger::ServerCertVerifier;
use rustls::client::WebPkiServerVerifier;
use rustls::pki_types::{ServerName, UnixTime};
use tracing::debug;

use crate::challenge::ServerTrustChain;
use crate::error::PinningError;
use crate::policy::TrustPolicy;

/// Evaluates presented chains against a fixed trust policy.
///
/// Built once at validator construction; evaluation itself takes `&self`
/// and holds no per-call state.
#[derive(Debug)]
pub struct TrustEvaluator {
    verifier: Arc<WebPkiServerVerifier>,
    server_name: ServerName<'static>,
}

impl TrustEvaluator {
    /// Builds an evaluator for the given policy.
    pub fn new(policy: &TrustPolicy) -> Result<Self, PinningError> {
        let provider = Arc::new(rustls::crypto::ring::default_provider());
        let verifier = WebPkiServerVerifier::builder_with_provider(policy.roots(), provider).build()?;

        Ok(TrustEvaluator {
            verifier,
            server_name: policy.server_name().clone(),
        })
    }

    /// Runs full chain evaluation at the current time.
    ///
    /// Returns `false` on any failure: empty chain, broken signature
    /// chain, expired certificate, or name mismatch. No partial credit.
    pub fn validate(&self, chain: &ServerTrustChain<'_>) -> bool {
        self.validate_at(chain, UnixTime::now())
    }

    /// Runs full chain evaluation at an explicit time.
    pub fn validate_at(&self, chain: &ServerTrustChain<'_>, now: UnixTime) -> bool {
        let Some(end_entity) = chain.end_entity() else {
            return false;
        };

        match self.verifier.verify_server_cert(
            end_entity,
            chain.intermediates(),
            &self.server_name,
            &[],
            now,
        ) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "chain failed trust evaluation");
                false
            }
        }
    }

    /// The underlying webpki verifier, for handshake-signature delegation.
    pub(crate) fn webpki_verifier(&self) -> &Arc<WebPkiServerVerifier> {
        &self.verifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustls::RootCertStore;

    #[test]
    fn empty_chain_is_invalid() {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let policy = TrustPolicy::tls_server(roots, "example.com").unwrap();
        let evaluator = TrustEvaluator::new(&policy).unwrap();

        let chain = ServerTrustChain::new(&[]);
        assert!(!evaluator.validate(&chain));
    }
}
