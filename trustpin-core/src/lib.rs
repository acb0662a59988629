// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Trustpin Core Library
//!
//! TLS server-trust validation with certificate pinning. Given the chain a
//! server presents during a handshake, the validator first runs baseline
//! PKI evaluation against a fixed trust policy and then requires the leaf
//! to match a locally bundled set of certificates or their public keys.
//! All cryptographic operations use the audited `ring` crate via rustls.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use trustpin_core::{
//!     pinned_client_config, PinningStrategy, ServerTrustValidator, TrustPolicy, ValidatorConfig,
//! };
//!
//! let config = ValidatorConfig::new(
//!     PinningStrategy::Certificate,
//!     TrustPolicy::with_mozilla_roots("relay.example.com")?,
//!     "/app/certificates",
//! )
//! .with_certificate("relay-ca", "cer")
//! .with_certificate("relay-backup", "crt");
//!
//! let validator = Arc::new(ServerTrustValidator::new(config)?);
//! let tls = pinned_client_config(validator)?;
//! ```

pub mod challenge;
pub mod config;
pub mod error;
pub mod eval;
pub mod keys;
pub mod policy;
pub mod store;
pub mod validator;
pub mod verifier;

pub use challenge::{
    AuthenticationMethod, ChallengeResponse, Disposition, ServerTrustChain, ServerTrustChallenge,
    ServerTrustCredential,
};
pub use config::{CertificateLocation, PinningStrategy, ValidatorConfig};
pub use error::PinningError;
pub use eval::TrustEvaluator;
pub use keys::{KeyExtractor, PinnedPublicKey};
pub use policy::TrustPolicy;
pub use store::{CertificateStore, PinnedCertificate};
pub use validator::ServerTrustValidator;
pub use verifier::{pinned_client_config, PinnedServerVerifier};
