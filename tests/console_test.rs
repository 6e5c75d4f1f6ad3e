//! Admin console behaviour over an in-memory backend.
//!
//! Run with: `cargo test --test console_test`
mod common;

use std::sync::atomic::Ordering;

use chrono::{Duration, Utc};
use terem_site::console::notify::{NoticeLevel, NoticeLog, TracingNotifier};
use terem_site::console::session::{AdminSession, FileSessionStore, MemorySessionStore, SessionStore};
use terem_site::console::{AdminConsole, GateState};
use terem_site::models::Contacts;

use common::{ADMIN_LOGIN, ADMIN_PASSWORD, FakeBackend, service, spawn_server};

type Console = AdminConsole<FakeBackend, MemorySessionStore, NoticeLog>;

fn seeded_backend() -> FakeBackend {
    let fake = FakeBackend::new();
    *fake.services.lock().unwrap() = vec![service("Sanding"), service("Painting")];
    *fake.contacts.lock().unwrap() = Some(Contacts {
        name: "Knyazhiy Terem".into(),
        tagline: "Finishing of wooden houses".into(),
        phone: "+7 (999) 123-45-67".into(),
        whatsapp: "79991234567".into(),
        email: "info@example.com".into(),
        updated_at: None,
    });
    fake
}

fn console(backend: FakeBackend) -> Console {
    AdminConsole::new(backend, MemorySessionStore::new(), NoticeLog::new())
}

async fn logged_in(backend: FakeBackend) -> Console {
    let mut console = console(backend);
    assert!(console.login(ADMIN_LOGIN, ADMIN_PASSWORD).await);
    console.notifier().drain();
    console
}

fn session_expiring_in(secs: i64) -> AdminSession {
    let issued_at = Utc::now() - Duration::hours(1);
    AdminSession {
        token: "stored-token".into(),
        issued_at,
        expires_at: Utc::now() + Duration::seconds(secs),
    }
}

#[tokio::test]
async fn test_valid_login_fetches_each_resource_once() {
    let mut console = console(seeded_backend());

    assert!(console.login(ADMIN_LOGIN, ADMIN_PASSWORD).await);

    assert!(console.is_authenticated());
    let backend = console.backend();
    assert_eq!(backend.calls("list_services"), 1);
    assert_eq!(backend.calls("list_portfolio"), 1);
    assert_eq!(backend.calls("get_contacts"), 1);
    assert_eq!(backend.token.lock().unwrap().as_deref(), Some("fake-token"));

    assert_eq!(console.services().items().len(), 2);
    assert!(console.portfolio().items().is_empty());
    assert_eq!(console.contacts().record().unwrap().name, "Knyazhiy Terem");
    assert!(console.sessions().load().await.is_some());

    let last = console.notifier().last().unwrap();
    assert_eq!(last.level, NoticeLevel::Success);
}

#[tokio::test]
async fn test_second_login_is_a_no_op() {
    let mut console = logged_in(seeded_backend()).await;

    assert!(console.login(ADMIN_LOGIN, ADMIN_PASSWORD).await);
    assert_eq!(console.backend().calls("login"), 1);
    assert_eq!(console.backend().calls("list_services"), 1);
}

#[tokio::test]
async fn test_invalid_login_stays_unauthenticated() {
    let mut console = console(seeded_backend());

    assert!(!console.login(ADMIN_LOGIN, "wrong").await);

    assert_eq!(console.state(), &GateState::Unauthenticated);
    assert_eq!(console.notifier().errors(), 1);
    assert_eq!(console.notifier().last().unwrap().description, "Invalid credentials");
    assert_eq!(console.backend().calls("list_services"), 0);
    assert!(console.services().items().is_empty());
    assert!(console.contacts().record().is_none());
    assert!(console.sessions().load().await.is_none());
}

#[tokio::test]
async fn test_empty_credentials_never_reach_backend() {
    let mut console = console(seeded_backend());

    assert!(!console.login("", ADMIN_PASSWORD).await);
    assert!(!console.login(ADMIN_LOGIN, "").await);

    assert_eq!(console.backend().calls("login"), 0);
    assert_eq!(console.notifier().errors(), 2);
}

#[tokio::test]
async fn test_logout_forgets_everything() {
    let mut console = logged_in(seeded_backend()).await;

    console.logout().await;

    assert!(!console.is_authenticated());
    assert!(console.services().items().is_empty());
    assert!(console.contacts().record().is_none());
    assert!(console.sessions().load().await.is_none());
    assert!(console.backend().token.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_mount_restores_live_session() {
    let sessions = MemorySessionStore::with_session(session_expiring_in(600));
    let mut console = AdminConsole::new(seeded_backend(), sessions, NoticeLog::new());

    assert!(console.mount().await);

    assert!(console.is_authenticated());
    assert_eq!(console.backend().calls("login"), 0);
    assert_eq!(console.backend().calls("list_services"), 1);
    assert_eq!(
        console.backend().token.lock().unwrap().as_deref(),
        Some("stored-token")
    );
}

#[tokio::test]
async fn test_mount_discards_expired_session() {
    let sessions = MemorySessionStore::with_session(session_expiring_in(-1));
    let mut console = AdminConsole::new(seeded_backend(), sessions, NoticeLog::new());

    assert!(!console.mount().await);

    assert!(!console.is_authenticated());
    assert!(console.sessions().load().await.is_none());
    assert_eq!(console.backend().calls("list_services"), 0);
}

#[tokio::test]
async fn test_session_survives_in_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut first = AdminConsole::new(seeded_backend(), FileSessionStore::new(&path), NoticeLog::new());
    assert!(first.login(ADMIN_LOGIN, ADMIN_PASSWORD).await);
    assert!(path.exists());

    let mut second = AdminConsole::new(seeded_backend(), FileSessionStore::new(&path), NoticeLog::new());
    assert!(second.mount().await);
    assert_eq!(second.backend().calls("login"), 0);

    second.logout().await;
    assert!(!path.exists());
}

#[tokio::test]
async fn test_create_appends_and_clears_draft() {
    let mut console = logged_in(seeded_backend()).await;

    let draft = console.services_mut().draft_mut();
    draft.name = "X".into();
    draft.description = "Y".into();
    draft.price = "1000".into();

    assert!(console.create_service().await);

    let items = console.services().items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].name, "X");
    assert!(console.services().draft().name.is_empty());
    // Merged locally, no second fetch.
    assert_eq!(console.backend().calls("list_services"), 1);
}

#[tokio::test]
async fn test_failed_create_keeps_draft() {
    let mut console = logged_in(seeded_backend()).await;
    console.backend().fail_writes.store(true, Ordering::SeqCst);

    console.services_mut().draft_mut().name = "Kept".into();
    assert!(!console.create_service().await);

    assert_eq!(console.services().draft().name, "Kept");
    assert_eq!(console.services().items().len(), 2);
    let notice = console.notifier().last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.description, "Database unavailable");
}

#[tokio::test]
async fn test_edit_touches_clone_until_saved() {
    let mut console = logged_in(seeded_backend()).await;
    let id = console.services().items()[0].id;

    assert!(console.services_mut().begin_edit(id));
    console.services_mut().editing_mut().unwrap().name = "Renamed".into();
    assert_eq!(console.services().get(id).unwrap().name, "Sanding");

    assert!(console.save_service().await);

    assert!(console.services().editing().is_none());
    assert_eq!(console.services().get(id).unwrap().name, "Renamed");
    assert_eq!(console.services().items().len(), 2);
    assert_eq!(console.backend().calls("update_service"), 1);
}

#[tokio::test]
async fn test_discard_leaves_server_untouched() {
    let mut console = logged_in(seeded_backend()).await;
    let id = console.services().items()[1].id;

    console.services_mut().begin_edit(id);
    console.services_mut().editing_mut().unwrap().price = "free".into();
    console.services_mut().discard_edit();

    assert!(console.services().editing().is_none());
    assert!(!console.save_service().await);
    assert_eq!(console.backend().calls("update_service"), 0);
    assert_ne!(console.services().get(id).unwrap().price, "free");
}

#[tokio::test]
async fn test_delete_removes_exactly_that_id() {
    let mut console = logged_in(seeded_backend()).await;
    let ids: Vec<_> = console.services().items().iter().map(|s| s.id).collect();

    assert!(console.delete_service(ids[0]).await);

    let remaining: Vec<_> = console.services().items().iter().map(|s| s.id).collect();
    assert_eq!(remaining, vec![ids[1]]);
    assert_eq!(console.backend().services.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_writes_refused_before_login() {
    let mut console = console(seeded_backend());

    assert!(!console.create_portfolio().await);
    assert!(!console.save_contacts().await);

    assert_eq!(console.backend().calls("create_portfolio"), 0);
    assert_eq!(console.notifier().errors(), 2);
}

#[tokio::test]
async fn test_contacts_saved_as_whole_record() {
    let mut console = logged_in(seeded_backend()).await;

    console.contacts_mut().record_mut().unwrap().email = "new@example.com".into();
    assert!(console.save_contacts().await);

    let stored = console.backend().contacts.lock().unwrap().clone().unwrap();
    assert_eq!(stored.email, "new@example.com");
    assert_eq!(stored.name, "Knyazhiy Terem");
    assert!(console.contacts().record().unwrap().updated_at.is_some());
}

#[tokio::test]
async fn test_refresh_replaces_local_list() {
    let mut console = logged_in(seeded_backend()).await;
    console.backend().services.lock().unwrap().push(service("Sealing"));

    console.refresh_all().await;

    assert_eq!(console.services().items().len(), 3);
    assert_eq!(console.backend().calls("list_services"), 2);
}

#[actix_web::test]
async fn test_console_against_live_server() {
    let server = spawn_server(1024).await;
    let mut console = AdminConsole::new(server.client(), MemorySessionStore::new(), TracingNotifier);

    assert!(!console.login(ADMIN_LOGIN, "nope").await);
    assert!(console.login(ADMIN_LOGIN, ADMIN_PASSWORD).await);

    console.portfolio_mut().draft_mut().title = "Sauna".into();
    console.portfolio_mut().draft_mut().image = "/uploads/sauna.jpg".into();
    console.portfolio_mut().draft_mut().category = "Baths".into();
    assert!(console.create_portfolio().await);

    let created = console.portfolio().items()[0].clone();
    console.refresh_all().await;
    assert_eq!(console.portfolio().items(), &[created]);
}
