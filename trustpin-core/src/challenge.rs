// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Authentication Challenges and Verdicts
//!
//! The wire between the transport layer and the validator: a challenge
//! carries the authentication method and the chain the peer presented,
//! the response carries exactly one disposition and, on acceptance, a
//! credential bound to the validated chain.

use rustls::pki_types::CertificateDer;

/// How the peer is asking to be authenticated.
///
/// Only [`AuthenticationMethod::ServerTrust`] challenges are evaluated;
/// every other method is rejected outright by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationMethod {
    /// TLS server trust: the peer presented a certificate chain.
    ServerTrust,
    /// Client certificate request.
    ClientCertificate,
    /// HTTP Basic authentication.
    HttpBasic,
    /// HTTP Digest authentication.
    HttpDigest,
}

/// The certificate chain a server presented during one handshake.
///
/// Borrowed from the transport layer and valid only for the duration of
/// one challenge; the leaf (end-entity) certificate is at index 0.
#[derive(Debug, Clone, Copy)]
pub struct ServerTrustChain<'a> {
    certificates: &'a [CertificateDer<'a>],
}

impl<'a> ServerTrustChain<'a> {
    /// Wraps a presented chain, leaf first.
    pub fn new(certificates: &'a [CertificateDer<'a>]) -> Self {
        ServerTrustChain { certificates }
    }

    /// The end-entity certificate (chain index 0), if the chain is
    /// non-empty.
    pub fn end_entity(&self) -> Option<&'a CertificateDer<'a>> {
        self.certificates.first()
    }

    /// The issuing certificates after the leaf, possibly empty.
    pub fn intermediates(&self) -> &'a [CertificateDer<'a>] {
        if self.certificates.is_empty() {
            self.certificates
        } else {
            &self.certificates[1..]
        }
    }

    /// All presented certificates, leaf first.
    pub fn certificates(&self) -> &'a [CertificateDer<'a>] {
        self.certificates
    }
}

/// One authentication challenge delivered by the transport layer.
#[derive(Debug, Clone, Copy)]
pub struct ServerTrustChallenge<'a> {
    method: AuthenticationMethod,
    server_trust: Option<ServerTrustChain<'a>>,
}

impl<'a> ServerTrustChallenge<'a> {
    /// Creates a challenge with an explicit method and optional chain.
    pub fn new(method: AuthenticationMethod, server_trust: Option<ServerTrustChain<'a>>) -> Self {
        ServerTrustChallenge {
            method,
            server_trust,
        }
    }

    /// Creates a server-trust challenge for a presented chain.
    pub fn server_trust(chain: ServerTrustChain<'a>) -> Self {
        Self::new(AuthenticationMethod::ServerTrust, Some(chain))
    }

    /// The authentication method of the protection space.
    pub fn method(&self) -> AuthenticationMethod {
        self.method
    }

    /// The presented chain, if the challenge carries one.
    pub fn chain(&self) -> Option<&ServerTrustChain<'a>> {
        self.server_trust.as_ref()
    }
}

/// The accept/cancel decision for a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Continue the handshake using the returned credential.
    UseCredential,
    /// Abort the connection.
    Cancel,
}

/// A credential bound to the exact chain the evaluator validated.
///
/// Handed back on acceptance so the transport proceeds with precisely the
/// trust that was checked, never a re-derived one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerTrustCredential {
    certificates: Vec<CertificateDer<'static>>,
}

impl ServerTrustCredential {
    /// Binds a credential to a presented chain by taking an owned copy.
    pub fn for_chain(chain: &ServerTrustChain<'_>) -> Self {
        ServerTrustCredential {
            certificates: chain
                .certificates()
                .iter()
                .map(|cert| cert.clone().into_owned())
                .collect(),
        }
    }

    /// The validated chain this credential is bound to, leaf first.
    pub fn certificates(&self) -> &[CertificateDer<'static>] {
        &self.certificates
    }
}

/// The validator's answer to one challenge: exactly one disposition, and
/// a credential only on acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeResponse {
    /// Accept or cancel.
    pub disposition: Disposition,
    /// Present iff the disposition is [`Disposition::UseCredential`].
    pub credential: Option<ServerTrustCredential>,
}

impl ChallengeResponse {
    /// The fail-closed verdict: cancel, no credential.
    pub fn cancel() -> Self {
        ChallengeResponse {
            disposition: Disposition::Cancel,
            credential: None,
        }
    }

    /// An accepting verdict carrying the bound credential.
    pub fn use_credential(credential: ServerTrustCredential) -> Self {
        ChallengeResponse {
            disposition: Disposition::UseCredential,
            credential: Some(credential),
        }
    }

    /// Whether the handshake may proceed.
    pub fn is_accepted(&self) -> bool {
        self.disposition == Disposition::UseCredential
    }
}
