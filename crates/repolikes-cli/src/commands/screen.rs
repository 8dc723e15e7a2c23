// SPDX-License-Identifier: Apache-2.0

//! List screen commands: show, like, browse.

use anyhow::{Context, Result, bail};
use console::{Term, style};
use dialoguer::Select;
use repolikes_core::{Alert, ListScreen, RepositoryApi};
use tracing::debug;

use super::maybe_spinner;
use super::types::ScreenResult;
use crate::cli::OutputContext;
use crate::dialog::show_alert;
use crate::output;

/// Collects alerts in order while presenting each one as it is raised.
struct Alerts<'a> {
    ctx: &'a OutputContext,
    raised: Vec<Alert>,
}

impl<'a> Alerts<'a> {
    fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            raised: Vec::new(),
        }
    }

    fn raise(&mut self, alert: Option<Alert>) -> Result<bool> {
        let Some(alert) = alert else {
            return Ok(false);
        };
        show_alert(&alert, self.ctx)?;
        self.raised.push(alert);
        Ok(true)
    }
}

async fn mount<A: RepositoryApi>(
    screen: &mut ListScreen<A>,
    ctx: &OutputContext,
) -> Option<Alert> {
    let spinner = maybe_spinner(ctx, "Carregando repositórios...");
    let alert = screen.mount().await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    alert
}

/// Loads the list once.
pub async fn run_list<A: RepositoryApi>(
    mut screen: ListScreen<A>,
    ctx: &OutputContext,
) -> Result<ScreenResult> {
    let mut alerts = Alerts::new(ctx);
    let alert = mount(&mut screen, ctx).await;
    alerts.raise(alert)?;
    Ok(ScreenResult::capture(&screen, alerts.raised))
}

/// Loads the list, then activates the like control of each id in turn.
///
/// Every id must name a loaded record; there is no control to activate
/// otherwise. Ids are all resolved before the first like is sent.
pub async fn run_like<A: RepositoryApi>(
    mut screen: ListScreen<A>,
    ids: &[String],
    ctx: &OutputContext,
) -> Result<ScreenResult> {
    let mut alerts = Alerts::new(ctx);
    let alert = mount(&mut screen, ctx).await;
    if alerts.raise(alert)? {
        return Ok(ScreenResult::capture(&screen, alerts.raised));
    }

    let targets = ids
        .iter()
        .map(|raw| {
            screen
                .state()
                .find(raw)
                .map(|repo| repo.id.clone())
                .with_context(|| format!("No repository with id '{raw}' on the list"))
        })
        .collect::<Result<Vec<_>>>()?;

    for id in &targets {
        let alert = screen.like(id).await;
        alerts.raise(alert)?;
    }

    Ok(ScreenResult::capture(&screen, alerts.raised))
}

/// Interactive loop: show the cards, like the picked one, repeat until quit.
pub async fn run_browse<A: RepositoryApi>(
    mut screen: ListScreen<A>,
    ctx: &OutputContext,
) -> Result<()> {
    if !ctx.is_interactive() {
        bail!("browse needs an interactive terminal; use `repolikes like <ID>` instead");
    }

    let alert = mount(&mut screen, ctx).await;
    if let Some(alert) = alert {
        show_alert(&alert, ctx)?;
    }

    let term = Term::stdout();
    loop {
        term.clear_screen().context("Failed to clear terminal")?;
        output::render(&ScreenResult::capture(&screen, Vec::new()), ctx)?;

        let cards = screen.cards();
        let mut items: Vec<String> = cards
            .iter()
            .map(|card| {
                format!(
                    "{} {}  {}",
                    card.like_button_label,
                    style(&card.title).bold(),
                    style(&card.likes_label).dim()
                )
            })
            .collect();
        items.push("Sair".to_string());

        let picked = Select::new()
            .with_prompt("Curtir qual repositório?")
            .items(&items)
            .default(0)
            .interact_opt()
            .context("Failed to read selection")?;

        let Some(card) = picked.and_then(|i| cards.get(i)) else {
            debug!("Leaving browse loop");
            return Ok(());
        };

        if let Some(alert) = screen.like(&card.id).await {
            show_alert(&alert, ctx)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use repolikes_core::{
        LIKE_FAILED, LOAD_FAILED, RepoLikesError, Repository, RepositoryId, ScreenPhase,
    };

    use super::*;
    use crate::cli::OutputFormat;

    /// Serves a fixed list; likes succeed unless the id is in `reject`.
    struct FixedApi {
        list: Option<Vec<Repository>>,
        reject: Vec<RepositoryId>,
        liked: Arc<Mutex<Vec<RepositoryId>>>,
    }

    impl FixedApi {
        fn new(list: Option<Vec<Repository>>) -> Self {
            Self {
                list,
                reject: Vec::new(),
                liked: Arc::default(),
            }
        }
    }

    fn unavailable() -> RepoLikesError {
        RepoLikesError::HttpStatus {
            status: 503,
            url: "http://test/repositories".to_string(),
        }
    }

    #[async_trait]
    impl RepositoryApi for FixedApi {
        async fn fetch_list(&self) -> repolikes_core::Result<Vec<Repository>> {
            self.list.clone().ok_or_else(unavailable)
        }

        async fn like_repository(
            &self,
            id: &RepositoryId,
        ) -> repolikes_core::Result<Option<Repository>> {
            if self.reject.contains(id) {
                return Err(unavailable());
            }
            self.liked.lock().unwrap().push(id.clone());
            Ok(None)
        }
    }

    fn json_ctx() -> OutputContext {
        OutputContext {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            is_tty: false,
        }
    }

    fn repos() -> Vec<Repository> {
        vec![
            Repository::builder()
                .id(1_i64)
                .title("repo-a")
                .techs(vec!["Node".to_string()])
                .build(),
            Repository::builder()
                .id("b-2")
                .title("repo-b")
                .likes(3)
                .build(),
        ]
    }

    #[test]
    fn list_reports_cards_in_order() {
        let screen = ListScreen::new(FixedApi::new(Some(repos())));

        let result = tokio_test::block_on(run_list(screen, &json_ctx())).unwrap();

        assert!(matches!(result.phase, ScreenPhase::Loaded));
        assert!(result.alerts.is_empty());
        let titles: Vec<_> = result.repositories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["repo-a", "repo-b"]);
    }

    #[test]
    fn list_failure_reports_connection_alert() {
        let screen = ListScreen::new(FixedApi::new(None));

        let result = tokio_test::block_on(run_list(screen, &json_ctx())).unwrap();

        assert!(matches!(result.phase, ScreenPhase::Empty));
        assert!(result.repositories.is_empty());
        assert_eq!(result.alerts, [LOAD_FAILED]);
    }

    #[test]
    fn like_resolves_raw_ids_against_the_list() {
        let screen = ListScreen::new(FixedApi::new(Some(repos())));
        let ids = vec!["b-2".to_string(), "1".to_string(), "b-2".to_string()];

        let result = tokio_test::block_on(run_like(screen, &ids, &json_ctx())).unwrap();

        assert!(result.alerts.is_empty());
        assert_eq!(result.repositories[0].likes_label, "1 curtida");
        assert_eq!(result.repositories[1].likes_label, "5 curtidas");
    }

    #[test]
    fn like_failure_keeps_count_and_continues() {
        let mut api = FixedApi::new(Some(repos()));
        api.reject.push(RepositoryId::Number(1));
        let screen = ListScreen::new(api);
        let ids = vec!["1".to_string(), "b-2".to_string()];

        let result = tokio_test::block_on(run_like(screen, &ids, &json_ctx())).unwrap();

        assert_eq!(result.alerts, [LIKE_FAILED]);
        assert_eq!(result.repositories[0].likes, 0);
        assert_eq!(result.repositories[1].likes, 4);
    }

    #[test]
    fn like_unknown_id_is_an_error() {
        let screen = ListScreen::new(FixedApi::new(Some(repos())));
        let ids = vec!["404".to_string()];

        let err = tokio_test::block_on(run_like(screen, &ids, &json_ctx())).unwrap_err();

        assert!(err.to_string().contains("'404'"));
    }

    #[test]
    fn like_unknown_id_sends_no_likes() {
        let api = FixedApi::new(Some(repos()));
        let liked = Arc::clone(&api.liked);
        let screen = ListScreen::new(api);
        let ids = vec!["1".to_string(), "b-2".to_string(), "404".to_string()];

        let err = tokio_test::block_on(run_like(screen, &ids, &json_ctx())).unwrap_err();

        assert!(err.to_string().contains("'404'"));
        assert!(liked.lock().unwrap().is_empty());
    }

    #[test]
    fn like_after_load_failure_stops_early() {
        let screen = ListScreen::new(FixedApi::new(None));
        let ids = vec!["1".to_string()];

        let result = tokio_test::block_on(run_like(screen, &ids, &json_ctx())).unwrap();

        assert_eq!(result.alerts, [LOAD_FAILED]);
        assert!(result.repositories.is_empty());
    }

    #[test]
    fn browse_refuses_non_interactive_output() {
        let screen = ListScreen::new(FixedApi::new(Some(repos())));

        let err = tokio_test::block_on(run_browse(screen, &json_ctx())).unwrap_err();

        assert!(err.to_string().contains("interactive terminal"));
    }
}
