// ███╗   ███╗ █████╗ ██████╗ ██╗  ██╗███████╗████████╗
// ████╗ ████║██╔══██╗██╔══██╗██║ ██╔╝██╔════╝╚══██╔══╝
// ██╔████╔██║███████║██████╔╝█████╔╝ █████╗     ██║
// ██║╚██╔╝██║██╔══██║██╔══██╗██╔═██╗ ██╔══╝     ██║
// ██║ ╚═╝ ██║██║  ██║██║  ██║██║  ██╗███████╗   ██║
// ╚═╝     ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝   ╚═╝
//
// R E L E V A N C E   E N G I N E
//
// One post per line on stdin, one JSON signal per line on stdout.
// The market catalog is re-read from disk in the background.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use market_relevance_engine::{
    load_markets, CatalogHandle, Config, MatchTables, Matcher, Signal,
};

fn print_banner(config: &Config) {
    let banner = format!(
        r#"
    ╔══════════════════════════════════════════════════════════╗
    ║         ⚡ MARKET RELEVANCE ENGINE ⚡                    ║
    ║                                                          ║
    ║   Input:    one post per line on stdin                   ║
    ║   Output:   one JSON signal per line on stdout           ║
    ║   Catalog:  {:<44} ║
    ╚══════════════════════════════════════════════════════════╝
"#,
        config.catalog_path.display().to_string()
    );
    // stdout carries signals, so the banner goes to stderr
    eprintln!("{}", banner);
}

/// Logs go to stderr; stdout is reserved for signals.
fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("reading MARKET_MATCH_* configuration")?;
    init_tracing(config.log_json);
    if !config.log_json {
        print_banner(&config);
    }

    let markets = load_markets(&config.catalog_path).with_context(|| {
        format!("loading market catalog from {}", config.catalog_path.display())
    })?;
    let catalog = Arc::new(CatalogHandle::new(markets, MatchTables::builtin())?);
    info!(
        markets = catalog.snapshot().len(),
        path = %config.catalog_path.display(),
        "✅ Catalog loaded"
    );

    let matcher = Arc::new(Matcher::new(config.matcher_config(), Arc::clone(&catalog))?);
    info!(
        min_confidence = config.min_confidence,
        max_results = config.max_results,
        "✅ Matcher ready"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let refresher = tokio::spawn(refresh_catalog(
        Arc::clone(&catalog),
        config.clone(),
        shutdown_rx.clone(),
    ));
    let mut reader = tokio::spawn(match_stdin(Arc::clone(&matcher), shutdown_rx));

    let reader_done = tokio::select! {
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => warn!("🛑 Shutdown signal received"),
                Err(err) => error!("❌ Signal listener error: {}", err),
            }
            false
        }
        _ = &mut reader => {
            info!("stdin closed");
            true
        }
    };
    let _ = shutdown_tx.send(true);

    let _ = tokio::time::timeout(Duration::from_secs(5), async {
        if !reader_done {
            let _ = reader.await;
        }
        let _ = refresher.await;
    })
    .await;

    let stats = matcher.stats().snapshot();
    info!(
        stats = %serde_json::to_string(&stats).unwrap_or_default(),
        "💤 Engine offline"
    );
    Ok(())
}

/// Re-read the catalog file on an interval. A failed refresh keeps the
/// current snapshot.
async fn refresh_catalog(
    catalog: Arc<CatalogHandle>,
    config: Config,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker =
        tokio::time::interval(config.catalog_refresh_interval.max(Duration::from_secs(1)));
    // first tick fires immediately and the catalog is already fresh
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let path = config.catalog_path.clone();
                let handle = Arc::clone(&catalog);
                match tokio::task::spawn_blocking(move || handle.reload_from(&path)).await {
                    Ok(Ok(count)) => info!(markets = count, "🔄 Catalog refreshed"),
                    Ok(Err(err)) => warn!(error = %err, "Catalog refresh failed, keeping previous snapshot"),
                    Err(err) => error!(error = %err, "Catalog refresh task panicked"),
                }
            }
            _ = shutdown.changed() => {
                info!("Catalog refresher: shutting down");
                break;
            }
        }
    }
}

/// Match each stdin line and write its signal to stdout as one JSON line.
async fn match_stdin(matcher: Arc<Matcher>, mut shutdown: watch::Receiver<bool>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = shutdown.changed() => break,
        };

        let text = match line {
            Ok(Some(text)) => text,
            Ok(None) => break,
            Err(err) => {
                error!(error = %err, "Failed to read stdin");
                break;
            }
        };
        if text.trim().is_empty() {
            continue;
        }

        let worker = Arc::clone(&matcher);
        let signal = match tokio::task::spawn_blocking(move || Signal::analyze(&worker, &text)).await {
            Ok(signal) => signal,
            Err(err) => {
                error!(error = %err, "Matcher task panicked");
                continue;
            }
        };

        let mut json = match serde_json::to_string(&signal) {
            Ok(json) => json,
            Err(err) => {
                error!(error = %err, "Failed to serialize signal");
                continue;
            }
        };
        json.push('\n');
        if let Err(err) = stdout.write_all(json.as_bytes()).await {
            error!(error = %err, "Failed to write to stdout");
            break;
        }
        let _ = stdout.flush().await;
    }
}
