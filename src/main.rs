use anyhow::Context as AnyhowContext;
use log_error::LogError;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use typesafe_repository::async_ops::Select;
use variant_grouping::grouper::VariantEngine;
use variant_grouping::report::VariantReport;
use variant_grouping::repository::PostgresCatalogRepository;
use variant_grouping::vocab::Vocabulary;
use vg_types::product::Ungrouped;

static RESULT_JSON: &str = "variants-analysis-result.json";
static APPLY_SQL: &str = "variants-apply.sql";

fn env_or(key: &str, default_value: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default_value.to_string())
}

fn connection_config() -> String {
    if let Some(url) = env::var("DATABASE_URL")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        return url;
    }
    let user = env_or("POSTGRES_USER", "postgres");
    let db = env_or("POSTGRES_DB", &user);
    format!(
        "host={} user={user} dbname={db} password={}",
        env_or("POSTGRES_HOST", "localhost"),
        env_or("POSTGRES_PASSWORD", "postgres"),
    )
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    if let Err(env::VarError::NotPresent) = env::var("RUST_LOG") {
        env::set_var("RUST_LOG", "INFO");
    }
    pretty_env_logger::formatted_timed_builder()
        .parse_default_env()
        .init();

    if std::path::Path::new(".env").exists() {
        envmnt::load_file(".env").log_error("Unable to load .env file");
    }

    let (client, connection) = tokio_postgres::connect(&connection_config(), tokio_postgres::NoTls)
        .await
        .context("Unable to connect to catalog db")?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            log::error!("connection error: {err}");
        }
    });

    let repo = PostgresCatalogRepository::new(Arc::new(client));
    let rows = tokio::time::timeout(Duration::from_secs(60), repo.select(&Ungrouped))
        .await
        .context("Catalog query timed out")??;
    log::info!("Loaded {} ungrouped products", rows.len());

    let engine = VariantEngine::new(&Vocabulary::default())?;
    let groups = engine.analyze(&rows);
    let report = VariantReport::new(rows.len(), groups);
    log::info!("Found {} variant groups", report.groups_found);

    println!("{}", report.render_text());

    tokio::fs::write(RESULT_JSON, serde_json::to_vec_pretty(&report)?)
        .await
        .context("Unable to write analysis result")?;
    tokio::fs::write(APPLY_SQL, report.sql_statements())
        .await
        .context("Unable to write correction script")?;
    log::info!("Results saved to {RESULT_JSON} and {APPLY_SQL}");

    Ok(())
}
