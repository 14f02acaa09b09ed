//! Certificate validation against the mock server behind a self-signed
//! certificate.
//!
//! # Design
//! The server certificate is generated per test and trusted by nobody, so a
//! default client must fail during the handshake and a client with the
//! bypass enabled must get through to the JSON payload.

use apiclient_core::{ApiClient, ClientConfig, HttpErrorKind, Outcome, OutcomeClient};
use axum_server::tls_rustls::RustlsConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Point {
    x: i64,
}

/// Serve the mock app over TLS and return its `https://.../api` base URL.
async fn start_tls_server() -> ClientConfig {
    // Several tests race to install it; only the first call wins.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let rcgen::CertifiedKey { cert, key_pair } =
        rcgen::generate_simple_self_signed(vec!["localhost".to_string(), "127.0.0.1".to_string()])
            .unwrap();
    let tls = RustlsConfig::from_pem(cert.pem().into_bytes(), key_pair.serialize_pem().into_bytes())
        .await
        .unwrap();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum_server::from_tcp_rustls(listener, tls)
            .serve(mock_server::app().into_make_service())
            .await
    });
    ClientConfig::parse(&format!("https://{addr}/api")).unwrap()
}

#[tokio::test]
async fn self_signed_certificate_is_rejected_by_default() {
    let config = start_tls_server().await;
    assert!(!config.bypass_invalid_certificate);

    let err = ApiClient::new(config.clone())
        .unwrap()
        .get::<Point>("point")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), HttpErrorKind::Transport);

    let outcome: Outcome<Point> = OutcomeClient::new(config).unwrap().get("point").await;
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn bypass_accepts_self_signed_certificate() {
    let config = start_tls_server()
        .await
        .with_bypass_invalid_certificate(true);

    let point: Point = ApiClient::new(config.clone())
        .unwrap()
        .get("point")
        .await
        .unwrap();
    assert_eq!(point, Point { x: 1 });

    let outcome: Outcome<Point> = OutcomeClient::new(config).unwrap().get("point").await;
    assert_eq!(outcome, Outcome::Success(Point { x: 1 }));
}

#[cfg(feature = "ureq-transport")]
#[tokio::test(flavor = "multi_thread")]
async fn ureq_bypass_follows_config() {
    use apiclient_core::UreqTransport;

    let config = start_tls_server().await;
    let strict = ApiClient::with_transport(config.clone(), UreqTransport::from_config(&config));
    let err = strict.get::<Point>("point").await.unwrap_err();
    assert_eq!(err.kind(), HttpErrorKind::Transport);

    let config = config.with_bypass_invalid_certificate(true);
    let relaxed = ApiClient::with_transport(config.clone(), UreqTransport::from_config(&config));
    let point: Point = relaxed.get("point").await.unwrap();
    assert_eq!(point.x, 1);
}
