use solciv_common::traits::LedgerClient;
use solciv_core::{Empire, RenderOptions, Session};
use solciv_types::config::AppConfig;

use crate::commands::helpers::{output_dir, write_artifacts};
use crate::factory;

/// All data the TUI needs to render. Wallet, seed and log live in the
/// [`Session`]; everything else is view state.
pub struct App {
    pub session: Session,
    /// Current map, rebuilt whenever the session's wallet changes.
    pub empire: Option<Empire>,
    pub opts: RenderOptions,
    pub config: AppConfig,
    ledger: Option<Box<dyn LedgerClient>>,

    // ── Input ───────────────────────────────────────────────────
    /// Address being typed.
    pub input: String,
    /// Keystrokes go to the address box.
    pub editing: bool,

    /// Show help overlay.
    pub show_help: bool,
    /// A lookup is in flight (drawn before the await).
    pub loading: bool,
}

impl App {
    /// Create the App from the on-disk config.
    pub fn new() -> Self {
        let config = solciv_core::workspace::load_config().unwrap_or_default();
        let mut rng = rand::thread_rng();
        let mut session = Session::with_random_seed(&mut rng);

        let ledger: Option<Box<dyn LedgerClient>> = match factory::ledger_from_config(&config) {
            Ok(client) => Some(Box::new(client)),
            Err(e) => {
                session.add_log(format!("Ledger unavailable: {e:#}"));
                None
            }
        };

        Self::with_parts(config, session, ledger)
    }

    pub fn with_parts(
        config: AppConfig,
        session: Session,
        ledger: Option<Box<dyn LedgerClient>>,
    ) -> Self {
        Self {
            opts: RenderOptions::from(&config.render),
            empire: session.empire(),
            session,
            config,
            ledger,
            input: String::new(),
            editing: true,
            show_help: false,
            loading: false,
        }
    }

    fn refresh_empire(&mut self) {
        self.empire = self.session.empire();
    }

    /// `g`: sample wallet, fresh seed.
    pub fn load_guest(&mut self) {
        self.session.load_guest(&mut rand::thread_rng());
        self.input.clear();
        self.refresh_empire();
    }

    /// `Enter`: look up the typed address. Failures land in the log and
    /// keep the current map. `loading` is always clear on return.
    pub async fn load_wallet(&mut self) {
        let address = self.input.trim().to_string();
        if address.is_empty() {
            self.loading = false;
            self.session.add_log("Wallet load failed: Missing address");
            return;
        }
        let Some(ledger) = self.ledger.as_deref() else {
            self.loading = false;
            self.session.add_log("Wallet load failed: no ledger configured");
            return;
        };

        self.loading = true;
        let program_id = self.config.ledger.token_program_id.clone();
        let loaded = self.session.load_wallet(ledger, &address, &program_id).await.is_ok();
        self.loading = false;

        if loaded {
            self.editing = false;
            self.refresh_empire();
        }
    }

    /// `s`: write the SVG and share text to `~/.solciv/maps`.
    pub fn save(&mut self) {
        let Some(empire) = &self.empire else {
            self.session.add_log("Nothing to save yet. Press g or load a wallet.");
            return;
        };
        let saved = output_dir(None).and_then(|dir| write_artifacts(&dir, empire, &self.opts));
        match saved {
            Ok((svg, share)) => self
                .session
                .add_log(format!("Saved {} + {}", svg.display(), share.display())),
            Err(e) => self.session.add_log(format!("Save failed: {e:#}")),
        }
    }

    pub fn share_text(&self) -> Option<String> {
        self.empire.as_ref().map(|e| e.share(&self.opts))
    }

    // ── Input editing ───────────────────────────────────────────

    pub fn push_char(&mut self, c: char) {
        if !c.is_whitespace() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
