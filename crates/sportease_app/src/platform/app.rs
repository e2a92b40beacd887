//! Composition root: wires config, state, effect execution, and rendering.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use site_logging::{site_info, site_warn};
use sportease_core::{update, AppState, Msg, PageConfig};

use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

/// How long the page waits for the first settlement before rendering
/// whatever it has.
const RENDER_DEADLINE: Duration = Duration::from_secs(10);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    let page = run_page(config::from_env())?;
    println!("{page}");
    Ok(())
}

/// Boots the page, waits for the first retrieval to settle (or the deadline
/// to pass), and returns the rendered document.
pub(crate) fn run_page(config: PageConfig) -> anyhow::Result<String> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone());

    let mut state = AppState::new(config);
    let mut rendered = String::new();

    msg_tx
        .send(Msg::PageOpened)
        .map_err(|_| anyhow!("message channel closed before startup"))?;

    let deadline = Instant::now() + RENDER_DEADLINE;
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        let msg = match msg_rx.recv_timeout(timeout) {
            Ok(msg) => msg,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                site_warn!("render deadline passed before the listing settled");
                break;
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        let settled = matches!(msg, Msg::VenuesSettled { .. });
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        // State is committed before effects run, so the in-flight flag is
        // observable before the retrieval goes out.
        runner.run(effects);
        if state.consume_dirty() {
            rendered = ui::render::render(&state.view());
        }
        if settled {
            break;
        }
    }

    if rendered.is_empty() {
        rendered = ui::render::render(&state.view());
    }

    let _ = update(state, Msg::PageClosed);
    runner.shutdown();
    site_info!("page rendered ({} bytes)", rendered.len());
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn render_against(server: &MockServer) -> String {
        let config = PageConfig {
            backend_url: server.uri(),
        };
        tokio::task::spawn_blocking(move || run_page(config))
            .await
            .expect("join render thread")
            .expect("rendered page")
    }

    #[tokio::test]
    async fn renders_a_fetched_listing_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/venues"))
            .and(query_param("seeded_only", "true"))
            .and(query_param("limit", "8"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"items": [{"id": 1, "name": "Court A", "address": "X", "pricePerHour": 500, "isSeeded": true}]}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let html = render_against(&server).await;

        assert_eq!(html.matches("<article class=\"venue-card\"").count(), 1);
        assert!(html.contains("Court A"));
        assert!(html.contains("₹500/hr"));
        assert!(html.contains("Founding Partner"));
    }

    #[tokio::test]
    async fn renders_an_empty_listing_without_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/venues"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"items": []}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let html = render_against(&server).await;

        assert_eq!(html.matches("<article class=\"venue-card\"").count(), 0);
        assert!(html.contains("No venues to show yet."));
        assert!(!html.contains("error"));
    }
}
