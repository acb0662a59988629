// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Certificate Store
//!
//! Loads the locally bundled DER certificates that form the pinning basis.
//! Loading runs once at validator construction; every failure is per-entry
//! and non-fatal, so a single unreadable resource never takes the whole
//! pinned set down with it.

use std::fs;
use std::path::Path;

use ring::digest;
use rustls::pki_types::CertificateDer;
use tracing::{debug, warn};
use x509_parser::prelude::*;

use crate::config::CertificateLocation;
use crate::error::PinningError;

/// An immutable parsed pinned certificate.
///
/// Identity is byte equality of the DER encoding. The SHA-256 fingerprint
/// is carried alongside for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedCertificate {
    der: CertificateDer<'static>,
    fingerprint: [u8; 32],
}

impl PinnedCertificate {
    /// Parses DER certificate bytes into a pinned certificate.
    ///
    /// The bytes must be exactly one well-formed X.509 certificate;
    /// trailing data is rejected.
    pub fn from_der(der: CertificateDer<'static>) -> Result<Self, PinningError> {
        let (rem, _cert) = X509Certificate::from_der(der.as_ref())
            .map_err(|e| PinningError::MalformedCertificate(e.to_string()))?;
        if !rem.is_empty() {
            return Err(PinningError::MalformedCertificate(
                "trailing bytes after certificate".into(),
            ));
        }

        let hash = digest::digest(&digest::SHA256, der.as_ref());
        let mut fingerprint = [0u8; 32];
        fingerprint.copy_from_slice(hash.as_ref());

        Ok(PinnedCertificate { der, fingerprint })
    }

    /// The DER encoding this certificate was parsed from.
    pub fn der(&self) -> &CertificateDer<'static> {
        &self.der
    }

    /// SHA-256 fingerprint of the DER encoding.
    pub fn fingerprint(&self) -> [u8; 32] {
        self.fingerprint
    }

    /// Hex-encoded fingerprint for logs.
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// Whether a presented certificate is byte-identical to this pin.
    pub fn matches(&self, presented: &CertificateDer<'_>) -> bool {
        self.der.as_ref() == presented.as_ref()
    }
}

/// The process-lifetime set of pinned certificates.
#[derive(Debug, Clone, Default)]
pub struct CertificateStore {
    certificates: Vec<PinnedCertificate>,
}

impl CertificateStore {
    /// Loads pinned certificates from a local resource bundle.
    ///
    /// Each location resolves to `<bundle_dir>/<name>.<extension>` and is
    /// read as a DER certificate. Entries that are missing, unreadable,
    /// or malformed are skipped and logged; loading always succeeds. An
    /// empty result is legal but means every challenge will be rejected.
    pub fn load(bundle_dir: &Path, locations: &[CertificateLocation]) -> Self {
        let mut certificates = Vec::with_capacity(locations.len());

        for location in locations {
            let path = location.resolve_in(bundle_dir);
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable pinned certificate");
                    continue;
                }
            };

            match PinnedCertificate::from_der(CertificateDer::from(bytes)) {
                Ok(cert) => {
                    debug!(
                        path = %path.display(),
                        fingerprint = %cert.fingerprint_hex(),
                        "loaded pinned certificate"
                    );
                    certificates.push(cert);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping malformed pinned certificate");
                }
            }
        }

        if certificates.is_empty() {
            warn!("pinned certificate set is empty; every server trust challenge will be rejected");
        }

        CertificateStore { certificates }
    }

    /// Builds a store from already-parsed certificates (embedded bundles,
    /// tests).
    pub fn from_certificates(certificates: Vec<PinnedCertificate>) -> Self {
        CertificateStore { certificates }
    }

    /// The pinned certificates, in load order.
    pub fn certificates(&self) -> &[PinnedCertificate] {
        &self.certificates
    }

    /// Whether a presented certificate byte-matches any pin.
    pub fn contains(&self, presented: &CertificateDer<'_>) -> bool {
        self.certificates.iter().any(|pin| pin.matches(presented))
    }

    /// Number of pinned certificates.
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Whether the pinned set is empty.
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}
