//! Job entrypoints for the two scheduled functions:
//! the collector (harvest sources, persist new articles) and the mailer
//! (query recent articles, send a digest). Each returns a small, serializable
//! response shape rather than `std::process::exit`ing directly, so the
//! `src/bin` wrappers and any future host (e.g. a serverless runtime) can
//! translate it into their own status convention.

pub mod config;

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};

use carbonwire_core::freshness::filter_by_freshness;
use carbonwire_core::SourceConfig;
use carbonwire_mailer::{render_full, render_short, DigestSender, SmtpSender};
use carbonwire_store::{DocumentStore, HttpDocumentStore, PersistableArticle, RecordKind};

use crate::config::{Config, EmailType};

const COLLECTION_NAME: &str = "CarbonWire Articles";

/// Response shape for the collector job.
#[derive(Debug, Serialize)]
pub struct CollectorResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    pub collected: usize,
    pub clipped: usize,
}

/// Response shape for the mailer job.
#[derive(Debug, Serialize)]
pub struct MailerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    pub fetched: usize,
    pub sent: bool,
}

/// Run one collection pass: load config, fan out to every configured
/// source, filter by freshness, persist each survivor. A configuration
/// error short-circuits with 400 and performs no I/O at all;
/// any other unrecoverable setup failure (client/store construction) is 500;
/// partial per-source failures never change the status code, only the log.
pub async fn run_collector() -> CollectorResponse {
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "collector job misconfigured");
            return CollectorResponse {
                status_code: 400,
                message: format!("configuration error: {e}"),
                collected: 0,
                clipped: 0,
            };
        }
    };
    cfg.log_redacted();

    let source_cfg = match SourceConfig::new() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client substrate");
            return CollectorResponse {
                status_code: 500,
                message: format!("internal error: {e}"),
                collected: 0,
                clipped: 0,
            };
        }
    };

    let store = match HttpDocumentStore::new(&cfg.store_base_url, &cfg.store_token) {
        Ok(s) => Arc::new(s) as Arc<dyn DocumentStore>,
        Err(e) => {
            error!(error = %e, "failed to build document store client");
            return CollectorResponse {
                status_code: 500,
                message: format!("internal error: {e}"),
                collected: 0,
                clipped: 0,
            };
        }
    };

    let collection_id = {
        let store = store.clone();
        let name = COLLECTION_NAME.to_string();
        carbonwire_store::collection_id::ensure(&cfg.collection_id_path, move || {
            let store = store.clone();
            let name = name.clone();
            async move { store.create_collection(&name).await }
        })
        .await
    };
    let collection_id = match collection_id {
        Ok(id) => id,
        Err(e) => {
            error!(error = %e, "failed to establish collection id");
            return CollectorResponse {
                status_code: 500,
                message: format!("internal error: {e}"),
                collected: 0,
                clipped: 0,
            };
        }
    };

    let registry = carbonwire_sources::registry::build_default();
    let result = carbonwire_sources::collect_from_sources(&cfg.sources, cfg.per_source, &source_cfg, &registry).await;

    let requested = cfg.sources.len() * cfg.per_source;
    let collected_raw = result.articles.len();
    let fresh = filter_by_freshness(result.articles, cfg.hours_back as i64, Utc::now());
    let clipped = collected_raw.saturating_sub(fresh.len());

    let mut persisted = 0usize;
    for article in &fresh {
        if !article.is_valid() {
            warn!(url = %article.url, "skipping invalid article, not persisting");
            continue;
        }
        let record = PersistableArticle::from_article(article, RecordKind::Headline);
        match store.insert_article(&collection_id, &record).await {
            Ok(()) => persisted += 1,
            Err(e) => warn!(url = %article.url, error = %e, "failed to persist article"),
        }
    }

    info!(
        requested_cap = requested,
        sources = cfg.sources.len(),
        collected = persisted,
        clipped,
        errors = result.errors.len(),
        "collector run complete"
    );

    CollectorResponse {
        status_code: 200,
        message: "collection complete".to_string(),
        collected: persisted,
        clipped,
    }
}

/// Run one digest pass: load config, query the store for everything since
/// `now - days_back`, render full or short digest per config, send over SMTP.
/// Zero fetched articles is still a 200/`sent: true` response —
/// an empty-but-successful digest is not an error.
pub async fn run_mailer() -> MailerResponse {
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "mailer job misconfigured");
            return MailerResponse {
                status_code: 400,
                message: format!("configuration error: {e}"),
                fetched: 0,
                sent: false,
            };
        }
    };
    cfg.log_redacted();

    let store = match HttpDocumentStore::new(&cfg.store_base_url, &cfg.store_token) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "failed to build document store client");
            return MailerResponse {
                status_code: 500,
                message: format!("internal error: {e}"),
                fetched: 0,
                sent: false,
            };
        }
    };

    let collection_id = match std::fs::read_to_string(&cfg.collection_id_path) {
        Ok(id) => id.trim().to_string(),
        Err(e) => {
            error!(error = %e, path = ?cfg.collection_id_path, "no collection id on record; has the collector ever run?");
            return MailerResponse {
                status_code: 500,
                message: "internal error: collection id not found".to_string(),
                fetched: 0,
                sent: false,
            };
        }
    };

    let since = Utc::now() - chrono::Duration::days(cfg.days_back as i64);
    let articles = match store.query_recent(&collection_id, since).await {
        Ok(a) => a,
        Err(e) => {
            error!(error = %e, "failed to query recent articles");
            return MailerResponse {
                status_code: 500,
                message: format!("internal error: {e}"),
                fetched: 0,
                sent: false,
            };
        }
    };
    let fetched = articles.len();

    let digest = match cfg.email_type {
        EmailType::Full => render_full(&articles, Utc::now()),
        EmailType::Short => render_short(&articles, Utc::now()),
    };

    let sender = match SmtpSender::new(&cfg.smtp_relay, &cfg.smtp_username, &cfg.smtp_app_password) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "failed to build SMTP transport");
            return MailerResponse {
                status_code: 500,
                message: format!("internal error: {e}"),
                fetched,
                sent: false,
            };
        }
    };

    match sender.send(digest, &cfg.mail_to, &cfg.mail_from).await {
        Ok(()) => {
            info!(fetched, "digest sent");
            MailerResponse {
                status_code: 200,
                message: "digest sent".to_string(),
                fetched,
                sent: true,
            }
        }
        Err(e) => {
            error!(error = %e, fetched, "failed to send digest after retries");
            MailerResponse {
                status_code: 500,
                message: format!("internal error: {e}"),
                fetched,
                sent: false,
            }
        }
    }
}
