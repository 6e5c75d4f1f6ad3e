//! Public landing page: read-only views loaded once, plus the contact form.

use crate::client::Backend;
use crate::console::notify::{Notice, Notifier};
use crate::models::portfolio;
use crate::models::{Contacts, PortfolioItem, Service};

/// Greeting pre-filled into the WhatsApp chat button.
pub const WHATSAPP_GREETING: &str = "Hello! I'm interested in your wood finishing services.";

/// Everything the landing page renders. Sections that failed to load stay empty.
#[derive(Debug, Clone, Default)]
pub struct LandingPage {
    pub services: Vec<Service>,
    pub portfolio: Vec<PortfolioItem>,
    pub contacts: Option<Contacts>,
}

impl LandingPage {
    /// Fetch services, portfolio and contacts in parallel. Never touches the backend again.
    pub async fn load<B: Backend, N: Notifier + ?Sized>(backend: &B, notifier: &N) -> Self {
        let (services, portfolio, contacts) = futures_util::join!(
            backend.list_services(),
            backend.list_portfolio(),
            backend.get_contacts(),
        );

        let mut page = LandingPage::default();
        match services {
            Ok(services) => page.services = services,
            Err(e) => notifier.notify(Notice::error("Failed to load services", e.message())),
        }
        match portfolio {
            Ok(items) => page.portfolio = items,
            Err(e) => notifier.notify(Notice::error("Failed to load portfolio", e.message())),
        }
        match contacts {
            Ok(contacts) => page.contacts = Some(contacts),
            Err(e) => notifier.notify(Notice::error("Failed to load contacts", e.message())),
        }
        page
    }

    pub fn categories(&self) -> Vec<&str> {
        portfolio::categories(&self.portfolio)
    }

    pub fn whatsapp_link(&self) -> Option<String> {
        self.contacts
            .as_ref()
            .filter(|c| !c.whatsapp.is_empty())
            .map(|c| c.whatsapp_link(WHATSAPP_GREETING))
    }
}

/// Visitor request from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactRequest {
    /// Name and phone are required, the message is optional.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name");
        }
        if self.phone.trim().is_empty() {
            return Err("Please enter your phone number");
        }
        Ok(())
    }

    /// Chat text sent to the company over WhatsApp.
    pub fn to_message(&self) -> String {
        let mut text = format!("Request from {} ({})", self.name.trim(), self.phone.trim());
        if !self.message.trim().is_empty() {
            text.push_str(": ");
            text.push_str(self.message.trim());
        }
        text
    }
}

/// The contact form state. Submitting resets the fields.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub request: ContactRequest,
}

impl ContactForm {
    /// Validate and hand the request over. Returns the WhatsApp link to open,
    /// or `None` when the request was incomplete.
    pub fn submit<N: Notifier + ?Sized>(&mut self, contacts: &Contacts, notifier: &N) -> Option<String> {
        if let Err(reason) = self.request.validate() {
            notifier.notify(Notice::error("Request not sent", reason));
            return None;
        }

        let link = contacts.whatsapp_link(&self.request.to_message());
        self.request = ContactRequest::default();
        notifier.notify(Notice::success(
            "Request sent!",
            "We will get back to you shortly.",
        ));
        Some(link)
    }
}
