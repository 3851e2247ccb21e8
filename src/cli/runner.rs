//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::view::TerminalView;
use crate::client::{PixabayClient, SearchClient};
use crate::config::SearchConfig;
use crate::controller::{GalleryView, SearchController, SearchOutcome};
use crate::error::{Error, Result, ResultExt};
use crate::types::Notification;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = PixabayClient::from_config(&config)?;
        let view = TerminalView::stdout(self.cli.format);
        let mut controller = SearchController::new(client, view);

        match &self.cli.command {
            Commands::Search { query, pages } => {
                run_search(&mut controller, query, *pages).await
            }
            Commands::Interactive => {
                let stdin = BufReader::new(tokio::io::stdin());
                run_interactive(&mut controller, stdin).await
            }
        }
    }

    /// Resolve configuration: flag > environment > file > defaults
    fn load_config(&self) -> Result<SearchConfig> {
        let config = match &self.cli.config {
            Some(path) => SearchConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SearchConfig::default(),
        };

        let mut config = config.with_env();
        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }

        debug!(base_url = %config.base_url, "Loaded configuration");
        Ok(config)
    }
}

/// Submit `query` and keep loading until `pages` pages are shown or the
/// collection ends
pub async fn run_search<C, W>(
    controller: &mut SearchController<C, TerminalView<W>>,
    query: &str,
    pages: u32,
) -> Result<()>
where
    C: SearchClient,
    W: Write,
{
    let mut outcome = controller.submit(query).await;
    flush_errors(controller)?;

    let mut loaded = 1;
    while outcome == SearchOutcome::MoreAvailable && loaded < pages {
        outcome = controller.load_more().await;
        flush_errors(controller)?;
        loaded += 1;
    }

    info!(
        query,
        pages = loaded,
        images = controller.view().rendered(),
        "Search finished"
    );

    match outcome {
        SearchOutcome::Rejected => Err(Error::EmptyQuery),
        SearchOutcome::Failed => Err(Error::Other(format!("search for '{query}' failed"))),
        _ => Ok(()),
    }
}

/// Drive the controller from line input
///
/// `:more` loads the next page while the load-more control is showing,
/// `:quit` (or end of input) stops, any other line is submitted as a query.
pub async fn run_interactive<C, W, R>(
    controller: &mut SearchController<C, TerminalView<W>>,
    input: R,
) -> Result<()>
where
    C: SearchClient,
    W: Write,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let outcome = match line.trim() {
            ":quit" | ":q" => break,
            ":more" | ":m" if !controller.view().load_more_visible() => {
                controller
                    .view_mut()
                    .notify(Notification::info("Nothing more to load."));
                flush_errors(controller)?;
                continue;
            }
            ":more" | ":m" => controller.load_more().await,
            _ => controller.submit(&line).await,
        };
        debug!(?outcome, "Handled input");
        flush_errors(controller)?;
    }

    Ok(())
}

fn flush_errors<C, W: Write>(controller: &mut SearchController<C, TerminalView<W>>) -> Result<()>
where
    C: SearchClient,
{
    match controller.view_mut().take_error() {
        Some(e) => Err(Error::Io(e)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::OutputFormat;
    use crate::cli::view::{END_OF_RESULTS_MESSAGE, NO_RESULTS_MESSAGE};
    use crate::types::{Image, SearchPage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Serves `total_hits` images in pages of 15
    struct FixedCatalog {
        total_hits: u64,
        calls: Mutex<Vec<(String, u32)>>,
    }

    impl FixedCatalog {
        fn new(total_hits: u64) -> Self {
            Self {
                total_hits,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SearchClient for FixedCatalog {
        async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchPage> {
            self.calls.lock().unwrap().push((query.to_string(), page));
            if query == "broken" {
                return Err(Error::http_status(500, ""));
            }
            let start = u64::from(page - 1) * 15;
            let end = (start + 15).min(self.total_hits);
            let hits = (start..end)
                .map(|id| Image {
                    id,
                    ..Image::default()
                })
                .collect();
            Ok(SearchPage::new(hits, self.total_hits))
        }
    }

    fn controller(total_hits: u64) -> SearchController<FixedCatalog, TerminalView<Vec<u8>>> {
        SearchController::new(
            FixedCatalog::new(total_hits),
            TerminalView::new(Vec::new(), OutputFormat::Pretty),
        )
    }

    fn output(controller: SearchController<FixedCatalog, TerminalView<Vec<u8>>>) -> String {
        let (_, view) = controller.into_parts();
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn test_run_search_stops_at_page_limit() {
        let mut controller = controller(100);
        run_search(&mut controller, "cats", 2).await.unwrap();

        assert_eq!(controller.view().rendered(), 30);
        assert!(controller.view().load_more_visible());
        assert_eq!(controller.client().calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_run_search_stops_at_end_of_results() {
        let mut controller = controller(40);
        run_search(&mut controller, "cats", 10).await.unwrap();

        assert_eq!(controller.view().rendered(), 40);
        assert_eq!(controller.client().calls.lock().unwrap().len(), 3);
        assert!(output(controller).contains(END_OF_RESULTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_run_search_errors() {
        let mut controller = controller(40);
        let err = run_search(&mut controller, "  ", 1).await.unwrap_err();
        assert!(matches!(err, Error::EmptyQuery));

        let err = run_search(&mut controller, "broken", 1).await.unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[tokio::test]
    async fn test_interactive_session() {
        let mut controller = controller(20);
        let input: &[u8] = b":more\ncats\n:more\n:more\n\nnone\n:quit\ncats\n";

        // The first `:more` has no query and the third comes after the end
        // of results, so neither fetches; the empty line is rejected
        run_interactive(&mut controller, input).await.unwrap();

        let calls = controller.client().calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                ("cats".to_string(), 1),
                ("cats".to_string(), 2),
                ("none".to_string(), 1),
            ]
        );

        let text = output(controller);
        assert!(text.contains("error: Please enter a search query."));
        assert_eq!(text.matches("info: Nothing more to load.").count(), 2);
        assert!(!text.contains(NO_RESULTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_interactive_no_results() {
        let mut controller = controller(0);
        run_interactive(&mut controller, &b"zzzznonexistent\n"[..])
            .await
            .unwrap();
        assert!(output(controller).contains(NO_RESULTS_MESSAGE));
    }
}
