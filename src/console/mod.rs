//! Admin console: the login gate and the three editing panels behind it.

pub mod collection;
pub mod contacts;
pub mod notify;
pub mod panel;
pub mod session;

use uuid::Uuid;

use crate::client::Backend;
use crate::models::admin::AdminLogin;

use collection::{Portfolio, Services};
use contacts::ContactsPanel;
use notify::{Notice, Notifier};
use panel::CrudPanel;
use session::{AdminSession, SessionStore};

/// The two states of the login gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Unauthenticated,
    Authenticated(AdminSession),
}

pub struct AdminConsole<B, S, N> {
    backend: B,
    sessions: S,
    notifier: N,
    state: GateState,
    services: CrudPanel<Services>,
    portfolio: CrudPanel<Portfolio>,
    contacts: ContactsPanel,
}

impl<B: Backend, S: SessionStore, N: Notifier> AdminConsole<B, S, N> {
    pub fn new(backend: B, sessions: S, notifier: N) -> Self {
        Self {
            backend,
            sessions,
            notifier,
            state: GateState::Unauthenticated,
            services: CrudPanel::new(),
            portfolio: CrudPanel::new(),
            contacts: ContactsPanel::new(),
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GateState::Authenticated(_))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn services(&self) -> &CrudPanel<Services> {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut CrudPanel<Services> {
        &mut self.services
    }

    pub fn portfolio(&self) -> &CrudPanel<Portfolio> {
        &self.portfolio
    }

    pub fn portfolio_mut(&mut self) -> &mut CrudPanel<Portfolio> {
        &mut self.portfolio
    }

    pub fn contacts(&self) -> &ContactsPanel {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut ContactsPanel {
        &mut self.contacts
    }

    /// Restore a stored, unexpired session and load every panel.
    /// An expired session is discarded and the login form stays up.
    pub async fn mount(&mut self) -> bool {
        let Some(session) = self.sessions.load().await else {
            return false;
        };

        if session.is_expired() {
            tracing::info!("Stored admin session expired at {}", session.expires_at);
            if let Err(e) = self.sessions.clear().await {
                tracing::warn!("Failed to clear expired session: {e}");
            }
            return false;
        }

        self.enter(session);
        self.refresh_all().await;
        true
    }

    /// Submit credentials. Empty fields are refused before any request.
    pub async fn login(&mut self, login: &str, password: &str) -> bool {
        if self.is_authenticated() {
            return true;
        }
        if login.is_empty() || password.is_empty() {
            self.notifier
                .notify(Notice::error("Login failed", "Enter both login and password"));
            return false;
        }

        let credentials = AdminLogin {
            login: login.to_string(),
            password: password.to_string(),
        };

        let response = match self.backend.login(&credentials).await {
            Ok(response) => response,
            Err(e) => {
                self.notifier.notify(Notice::error("Login failed", e.message()));
                return false;
            }
        };

        let Some(session) = AdminSession::from_login(&response) else {
            self.notifier
                .notify(Notice::error("Login failed", response.message));
            return false;
        };

        if let Err(e) = self.sessions.save(&session).await {
            tracing::warn!("Admin session will not survive a reload: {e}");
        }
        self.enter(session);
        self.notifier.notify(Notice::success(
            "Logged in",
            "Welcome to the admin panel!",
        ));

        self.refresh_all().await;
        true
    }

    /// Forget the session and every cached collection.
    pub async fn logout(&mut self) {
        if let Err(e) = self.sessions.clear().await {
            tracing::warn!("Failed to clear admin session: {e}");
        }
        self.backend.set_token(None);
        self.state = GateState::Unauthenticated;
        self.services.reset();
        self.portfolio.reset();
        self.contacts.reset();
    }

    /// Fetch all three collections concurrently, one request each.
    pub async fn refresh_all(&mut self) {
        let backend = &self.backend;
        let notifier = &self.notifier;
        futures_util::join!(
            self.services.refresh(backend, notifier),
            self.portfolio.refresh(backend, notifier),
            self.contacts.load(backend, notifier),
        );
    }

    pub async fn create_service(&mut self) -> bool {
        self.guard()
            && self.services.create(&self.backend, &self.notifier).await
    }

    pub async fn save_service(&mut self) -> bool {
        self.guard()
            && self.services.save_edit(&self.backend, &self.notifier).await
    }

    pub async fn delete_service(&mut self, id: Uuid) -> bool {
        self.guard()
            && self.services.delete(id, &self.backend, &self.notifier).await
    }

    pub async fn create_portfolio(&mut self) -> bool {
        self.guard()
            && self.portfolio.create(&self.backend, &self.notifier).await
    }

    pub async fn save_portfolio(&mut self) -> bool {
        self.guard()
            && self.portfolio.save_edit(&self.backend, &self.notifier).await
    }

    pub async fn delete_portfolio(&mut self, id: Uuid) -> bool {
        self.guard()
            && self.portfolio.delete(id, &self.backend, &self.notifier).await
    }

    pub async fn save_contacts(&mut self) -> bool {
        self.guard() && self.contacts.save(&self.backend, &self.notifier).await
    }

    fn enter(&mut self, session: AdminSession) {
        self.backend.set_token(Some(session.token.clone()));
        self.state = GateState::Authenticated(session);
    }

    /// Writes are only offered behind the gate.
    fn guard(&self) -> bool {
        if !self.is_authenticated() {
            self.notifier
                .notify(Notice::error("Not logged in", "Log in to edit the site"));
        }
        self.is_authenticated()
    }
}
