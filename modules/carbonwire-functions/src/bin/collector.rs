//! Collector job entrypoint: harvest every configured source, persist new
//! articles to the document store. Grounded on `rootsignal-editions`'s
//! `main.rs` shape — tracing setup, then a single top-level async call whose
//! result becomes the process's exit behavior.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("carbonwire=info".parse().unwrap()))
        .init();

    let response = carbonwire_functions::run_collector().await;
    println!("{}", serde_json::to_string(&response).expect("response is always serializable"));

    if response.status_code >= 500 {
        std::process::exit(1);
    }
}
