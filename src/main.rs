mod forms;
mod routes;
mod views;

use hubsite::security;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let state = routes::default_state().await;
    let app = routes::build_router(state);

    let cert_path = security::cert_path();
    let key_path = security::key_path();
    security::ensure_tls_cert(&cert_path, &key_path)
        .await
        .expect("failed to prepare TLS certificates");
    let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .expect("failed to load TLS certificates");

    let bind = std::env::var("HUBSITE_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let addr = bind.parse().expect("invalid bind address");
    info!("server listening on https://{bind}");
    axum_server::bind_rustls(addr, tls_config)
        .serve(app.into_make_service())
        .await
        .expect("server failed");
}
