// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pinning Error Types
//!
//! Errors that can occur while constructing a validator. Per-challenge
//! failures are never errors: they collapse into a `Cancel` disposition
//! so the transport layer only ever sees a verdict.

use thiserror::Error;

/// Errors raised while building the pinning validator or its TLS wiring.
#[derive(Debug, Error)]
pub enum PinningError {
    /// The host name given to the trust policy is not a valid server name.
    #[error("Invalid server name for trust policy: {0}")]
    InvalidServerName(#[from] rustls::pki_types::InvalidDnsNameError),

    /// The webpki chain verifier could not be built from the policy roots.
    #[error("Failed to build trust verifier: {0}")]
    VerifierBuild(#[from] rustls::client::VerifierBuilderError),

    /// Certificate bytes handed to the store do not parse as DER X.509.
    #[error("Malformed DER certificate: {0}")]
    MalformedCertificate(String),

    /// Building the pinned rustls client configuration failed.
    #[error("TLS configuration error: {0}")]
    Tls(#[from] rustls::Error),
}
