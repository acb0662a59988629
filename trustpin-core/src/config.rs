// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validator Configuration
//!
//! Construction-time configuration for the pinning validator: which
//! comparison unit to pin on, which trust policy to evaluate under, and
//! where the locally bundled certificates live. Fixed for the validator's
//! lifetime; there is no runtime mutation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::policy::TrustPolicy;

/// Which comparison unit the validator pins on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinningStrategy {
    /// Accept iff the server leaf's encoded bytes exactly match a pinned
    /// certificate.
    Certificate,
    /// Accept iff the server leaf's public key material matches a key
    /// derived from a pinned certificate.
    PublicKey,
}

/// A (name, extension) pair identifying one certificate file inside the
/// local resource bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateLocation {
    /// File stem, e.g. `"relay-ca"`.
    pub name: String,
    /// File extension, e.g. `"cer"` or `"crt"`.
    pub extension: String,
}

impl CertificateLocation {
    /// Creates a location from a resource name and extension.
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        CertificateLocation {
            name: name.into(),
            extension: extension.into(),
        }
    }

    /// The file name this location resolves to, e.g. `"relay-ca.cer"`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// Resolves this location against a bundle directory.
    pub fn resolve_in(&self, bundle_dir: &Path) -> PathBuf {
        bundle_dir.join(self.file_name())
    }
}

/// Construction-time configuration for a [`ServerTrustValidator`].
///
/// [`ServerTrustValidator`]: crate::validator::ServerTrustValidator
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Pinning strategy, fixed for the validator's lifetime.
    pub strategy: PinningStrategy,

    /// Trust policy every presented chain is evaluated under.
    pub policy: TrustPolicy,

    /// Directory the certificate locations are resolved against.
    pub bundle_dir: PathBuf,

    /// Locally bundled DER certificates forming the pinning basis.
    pub certificate_locations: Vec<CertificateLocation>,
}

impl ValidatorConfig {
    /// Creates a configuration with an empty location list.
    pub fn new(strategy: PinningStrategy, policy: TrustPolicy, bundle_dir: impl Into<PathBuf>) -> Self {
        ValidatorConfig {
            strategy,
            policy,
            bundle_dir: bundle_dir.into(),
            certificate_locations: Vec::new(),
        }
    }

    /// Adds one bundled certificate location.
    pub fn with_certificate(mut self, name: impl Into<String>, extension: impl Into<String>) -> Self {
        self.certificate_locations
            .push(CertificateLocation::new(name, extension));
        self
    }
}
