use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::export::{write_artifact, DeckExporter, OutlineExporter};
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};
use crate::ui::wizard::{Notice, WizardResult, WizardScreen};
use crate::wizard::{PitchDraft, Wizard};

pub struct App {
    config: Config,
    screen: WizardScreen,
    exporter: OutlineExporter,
    /// Where Ctrl-S writes the draft
    draft_path: PathBuf,
    should_quit: bool,
    /// Printed after the terminal is restored
    exit_message: Option<String>,
}

impl App {
    /// Start a session, resuming `draft_file` when it exists
    pub fn new(config: Config, draft_file: Option<PathBuf>) -> Result<Self> {
        let draft_path = draft_file.unwrap_or_else(|| config.draft_path());

        let draft = if draft_path.exists() {
            tracing::info!(path = %draft_path.display(), "resuming draft");
            PitchDraft::load(&draft_path)?
        } else {
            config.initial_draft()
        };

        let wizard = Wizard::pitch_deck(draft, config.gate_policy());
        tracing::info!(
            policy = ?wizard.policy(),
            steps = wizard.step_count(),
            "wizard started"
        );

        Ok(Self {
            config,
            screen: WizardScreen::new(wizard),
            exporter: OutlineExporter::new(),
            draft_path,
            should_quit: false,
            exit_message: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| self.screen.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await;
                    }
                }
            }
        }

        drop(guard);

        if let Some(message) = &self.exit_message {
            println!("{}", message);
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        match self.screen.handle_key(key) {
            WizardResult::Continue => {}
            WizardResult::Cancel => {
                tracing::info!("wizard cancelled");
                self.should_quit = true;
            }
            WizardResult::SaveDraft => self.save_draft().await,
            WizardResult::Export => self.export().await,
        }
    }

    async fn save_draft(&mut self) {
        match self.screen.wizard().draft().save(&self.draft_path).await {
            Ok(()) => {
                tracing::info!(path = %self.draft_path.display(), "draft saved");
                self.screen.set_notice(Notice::Info(format!(
                    "Draft saved to {}",
                    self.draft_path.display()
                )));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save draft");
                self.screen
                    .set_notice(Notice::Error(format!("Could not save draft: {:#}", e)));
            }
        }
    }

    async fn export(&mut self) {
        let artifact = match self.exporter.export(self.screen.wizard().draft()) {
            Ok(artifact) => artifact,
            Err(e) => {
                tracing::warn!(error = %e, "export refused");
                self.screen.set_notice(Notice::Error(e.to_string()));
                return;
            }
        };

        match write_artifact(&self.config.output_path(), &artifact).await {
            Ok(path) => {
                self.exit_message = Some(format!("Pitch deck written to {}", path.display()));
                self.should_quit = true;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to write deck");
                self.screen
                    .set_notice(Notice::Error(format!("Could not write deck: {:#}", e)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::TeamMember;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.paths.state = temp_dir.path().join("state").to_string_lossy().to_string();
        config.paths.output = temp_dir.path().join("out").to_string_lossy().to_string();
        config
    }

    fn complete_draft() -> PitchDraft {
        let mut draft = PitchDraft::initial();
        draft.company_name = "Acme Corp".to_string();
        draft.tagline = "We make work better".to_string();
        draft.problem = "Slow invoices".to_string();
        draft.solution = "Automation".to_string();
        draft.market_size = "$40B".to_string();
        draft.target_audience = "Accountants".to_string();
        draft.revenue_model = "SaaS".to_string();
        draft.ask_amount = "$2M".to_string();
        draft.use_of_funds = "Hiring".to_string();
        draft.team_members = vec![TeamMember::new("Ada", "CEO", "")];
        draft
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_new_app_starts_from_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.wizard.default_template = "nonprofit".to_string();

        let app = App::new(config, None).unwrap();
        assert_eq!(app.screen.wizard().draft().selected_template, "nonprofit");
        assert_eq!(app.draft_path, temp_dir.path().join("state").join("draft.toml"));
    }

    #[tokio::test]
    async fn test_ctrl_s_saves_and_resumes_draft() {
        let temp_dir = TempDir::new().unwrap();
        let draft_file = temp_dir.path().join("drafts").join("acme.json");

        let mut app = App::new(test_config(&temp_dir), Some(draft_file.clone())).unwrap();
        app.handle_key(press(KeyCode::Enter)).await;
        for c in "Acme".chars() {
            app.handle_key(press(KeyCode::Char(c))).await;
        }
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .await;

        assert!(matches!(app.screen.notice(), Some(Notice::Info(_))));
        let resumed = App::new(test_config(&temp_dir), Some(draft_file)).unwrap();
        assert_eq!(resumed.screen.wizard().draft().company_name, "Acme");
    }

    #[tokio::test]
    async fn test_export_writes_deck_and_quits() {
        let temp_dir = TempDir::new().unwrap();
        let draft_file = temp_dir.path().join("draft.yaml");
        complete_draft().save(&draft_file).await.unwrap();

        let mut app = App::new(test_config(&temp_dir), Some(draft_file)).unwrap();
        for _ in 0..7 {
            app.handle_key(press(KeyCode::Enter)).await;
        }

        assert!(app.should_quit);
        let deck = temp_dir.path().join("out").join("acme-corp-pitch.md");
        assert!(deck.exists());
        assert!(app
            .exit_message
            .as_deref()
            .is_some_and(|m| m.contains("acme-corp-pitch.md")));
    }

    #[tokio::test]
    async fn test_cancel_quits_without_export() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = App::new(test_config(&temp_dir), None).unwrap();
        app.handle_key(press(KeyCode::Esc)).await;
        assert!(app.should_quit);
        assert!(app.exit_message.is_none());
        assert!(!temp_dir.path().join("out").exists());
    }
}
