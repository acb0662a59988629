// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! rustls Integration
//!
//! Wires the validator into a rustls handshake as a custom certificate
//! verifier. Every presented chain becomes a server-trust challenge; a
//! `Cancel` verdict surfaces as a single opaque certificate error so the
//! peer learns nothing about which check failed.

use std::sync::Arc;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{CertificateError, ClientConfig, DigitallySignedStruct, Error as TlsError, SignatureScheme};

use crate::challenge::{ServerTrustChain, ServerTrustChallenge};
use crate::error::PinningError;
use crate::validator::ServerTrustValidator;

/// Certificate verifier that delegates every handshake to a
/// [`ServerTrustValidator`].
#[derive(Debug)]
pub struct PinnedServerVerifier {
    validator: Arc<ServerTrustValidator>,
}

impl PinnedServerVerifier {
    /// Wraps a validator for use as a rustls certificate verifier.
    pub fn new(validator: Arc<ServerTrustValidator>) -> Self {
        PinnedServerVerifier { validator }
    }
}

impl ServerCertVerifier for PinnedServerVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, TlsError> {
        let mut certificates = Vec::with_capacity(1 + intermediates.len());
        certificates.push(end_entity.clone());
        certificates.extend(intermediates.iter().cloned());

        let chain = ServerTrustChain::new(&certificates);
        let challenge = ServerTrustChallenge::server_trust(chain);
        let response = self.validator.on_server_trust_challenge_at(&challenge, now);

        if response.is_accepted() {
            Ok(ServerCertVerified::assertion())
        } else {
            // One opaque error for every rejection; no oracle about
            // whether evaluation or pinning failed.
            Err(TlsError::InvalidCertificate(
                CertificateError::ApplicationVerificationFailure,
            ))
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, TlsError> {
        self.validator
            .evaluator()
            .webpki_verifier()
            .verify_tls12_signature(message, cert, dss)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, TlsError> {
        self.validator
            .evaluator()
            .webpki_verifier()
            .verify_tls13_signature(message, cert, dss)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.validator
            .evaluator()
            .webpki_verifier()
            .supported_verify_schemes()
    }
}

/// Builds a rustls client configuration that pins every connection
/// through the given validator.
pub fn pinned_client_config(validator: Arc<ServerTrustValidator>) -> Result<ClientConfig, PinningError> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(PinnedServerVerifier::new(validator)))
        .with_no_client_auth();
    Ok(config)
}
