//! Mailer job entrypoint: query recently-persisted articles, render and send
//! the digest. Same shape as `bin/collector.rs` by design — one `Config`,
//! one job call, one printed response line.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("carbonwire=info".parse().unwrap()))
        .init();

    let response = carbonwire_functions::run_mailer().await;
    println!("{}", serde_json::to_string(&response).expect("response is always serializable"));

    if response.status_code >= 500 {
        std::process::exit(1);
    }
}
