// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Trust Policy
//!
//! The evaluation policy every presented chain is checked under before any
//! pin comparison runs: a set of trust anchors plus the server name the
//! peer is expected to present. Supplied once at validator construction
//! and immutable for its lifetime.

use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::RootCertStore;

use crate::error::PinningError;

// SPKI algorithm identifiers the ring-backed evaluator can handle.
const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
const OID_ED25519: &str = "1.3.101.112";

/// Chain-evaluation policy: trust anchors plus the expected server name.
///
/// The equivalent of a basic TLS-server X.509 policy: signatures, validity
/// window, and name matching are all checked against this when a chain is
/// evaluated.
#[derive(Debug, Clone)]
pub struct TrustPolicy {
    roots: Arc<RootCertStore>,
    server_name: ServerName<'static>,
}

impl TrustPolicy {
    /// Creates a policy from explicit trust anchors and the host name the
    /// server is expected to present.
    pub fn tls_server(roots: RootCertStore, host: &str) -> Result<Self, PinningError> {
        let server_name = ServerName::try_from(host.to_string())?;
        Ok(TrustPolicy {
            roots: Arc::new(roots),
            server_name,
        })
    }

    /// Creates a policy anchored on the bundled Mozilla root set.
    ///
    /// This is the common production shape: the chain must validate
    /// against the public web PKI, and pinning then narrows trust to the
    /// bundled certificates on top of that.
    pub fn with_mozilla_roots(host: &str) -> Result<Self, PinningError> {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        Self::tls_server(roots, host)
    }

    /// The trust anchors chains are validated against.
    pub fn roots(&self) -> Arc<RootCertStore> {
        Arc::clone(&self.roots)
    }

    /// The server name the peer is expected to present.
    pub fn server_name(&self) -> &ServerName<'static> {
        &self.server_name
    }

    /// Whether this policy's evaluator can handle the given SPKI
    /// algorithm. Key extraction treats unsupported algorithms as
    /// policy-incompatible and yields no key.
    pub fn supports_key_algorithm(&self, oid: &str) -> bool {
        matches!(oid, OID_RSA_ENCRYPTION | OID_EC_PUBLIC_KEY | OID_ED25519)
    }
}
