// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Generated certificate fixtures shared across test modules: a throwaway
//! CA, leaves issued under it, and policies anchored on it.

#![allow(dead_code)]

use rcgen::{BasicConstraints, Certificate, CertificateParams, IsCa, KeyPair};
use rustls::RootCertStore;
use trustpin_core::{CertificateStore, PinnedCertificate, TrustPolicy};

/// Host name used by default fixtures and policies.
pub const TEST_HOST: &str = "relay.example.com";

/// A self-signed CA with its signing key.
pub struct TestCa {
    pub cert: Certificate,
    pub key: KeyPair,
}

/// Generates a fresh self-signed CA.
pub fn test_ca() -> TestCa {
    let key = KeyPair::generate().unwrap();
    let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    let cert = params.self_signed(&key).unwrap();
    TestCa { cert, key }
}

/// Issues a leaf for `host` under the CA with a fresh key pair.
pub fn issue_leaf(ca: &TestCa, host: &str) -> Certificate {
    let key = KeyPair::generate().unwrap();
    issue_leaf_with_key(ca, host, &key)
}

/// Issues a leaf for `host` under the CA using the given key pair.
pub fn issue_leaf_with_key(ca: &TestCa, host: &str, key: &KeyPair) -> Certificate {
    let params = CertificateParams::new(vec![host.to_string()]).unwrap();
    params.signed_by(key, &ca.cert, &ca.key).unwrap()
}

/// Issues a leaf whose validity window lies entirely in the past.
pub fn issue_expired_leaf(ca: &TestCa, host: &str) -> Certificate {
    let key = KeyPair::generate().unwrap();
    let mut params = CertificateParams::new(vec![host.to_string()]).unwrap();
    params.not_before = rcgen::date_time_ymd(2000, 1, 1);
    params.not_after = rcgen::date_time_ymd(2001, 1, 1);
    params.signed_by(&key, &ca.cert, &ca.key).unwrap()
}

/// A trust policy anchored solely on the test CA.
pub fn policy_for(ca: &TestCa, host: &str) -> TrustPolicy {
    let mut roots = RootCertStore::empty();
    roots.add(ca.cert.der().clone()).unwrap();
    TrustPolicy::tls_server(roots, host).unwrap()
}

/// Wraps a generated certificate as a pin.
pub fn pin(cert: &Certificate) -> PinnedCertificate {
    PinnedCertificate::from_der(cert.der().clone()).unwrap()
}

/// A store pinning exactly the given certificates.
pub fn store_of(certs: &[&Certificate]) -> CertificateStore {
    CertificateStore::from_certificates(certs.iter().map(|c| pin(c)).collect())
}
