#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{App, HttpServer};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use migration::{Migrator, MigratorTrait};
use uuid::Uuid;

use terem_site::client::{ApiClient, ApiError, ApiResult, Backend};
use terem_site::config::{ClientConfig, Settings};
use terem_site::db::create_pool;
use terem_site::gallery::upload::UploadFile;
use terem_site::models::admin::{ActionResponse, AdminLogin, AdminResponse};
use terem_site::models::portfolio::PortfolioInput;
use terem_site::models::services::ServiceInput;
use terem_site::models::uploaded_images::ImageUploadResponse;
use terem_site::models::{Contacts, PortfolioItem, Service, UploadedImage};
use terem_site::server::configure_app;

pub const ADMIN_LOGIN: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

// ── In-process server ──

/// A running backend on an ephemeral port with its own database and upload dir.
pub struct TestServer {
    pub base_url: String,
    pub settings: Settings,
    _dir: tempfile::TempDir,
}

impl TestServer {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ClientConfig::new(self.base_url.clone()))
    }

    /// A fresh admin bearer token.
    pub async fn admin_token(&self) -> String {
        self.client()
            .login(&AdminLogin {
                login: ADMIN_LOGIN.into(),
                password: ADMIN_PASSWORD.into(),
            })
            .await
            .expect("login request failed")
            .token
            .expect("login returned no token")
    }

    /// A client already carrying a valid admin token.
    pub async fn admin_client(&self) -> ApiClient {
        let mut client = self.client();
        client.set_token(Some(self.admin_token().await));
        client
    }
}

pub async fn spawn_server(max_upload_bytes: u64) -> TestServer {
    let dir = tempfile::tempdir().expect("tempdir");
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

    let settings = Settings {
        database_url: database_url.clone(),
        port: 0,
        upload_dir: dir.path().join("uploads"),
        public_base_url: String::new(),
        admin_login: ADMIN_LOGIN.into(),
        admin_password: ADMIN_PASSWORD.into(),
        jwt_secret: "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx".into(),
        session_ttl_secs: 3600,
        max_upload_bytes,
    };

    std::fs::create_dir_all(&settings.upload_dir).expect("upload dir");

    let db = create_pool(&database_url).await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");

    let app_config = configure_app(db, settings.clone());
    let server = HttpServer::new(move || App::new().configure(app_config.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    TestServer {
        base_url: format!("http://{addr}"),
        settings,
        _dir: dir,
    }
}

// ── In-memory backend ──

/// Backend double that keeps collections in memory and counts every call.
#[derive(Default)]
pub struct FakeBackend {
    pub services: Mutex<Vec<Service>>,
    pub portfolio: Mutex<Vec<PortfolioItem>>,
    pub contacts: Mutex<Option<Contacts>>,
    pub images: Mutex<Vec<UploadedImage>>,
    pub token: Mutex<Option<String>>,
    pub fail_writes: AtomicBool,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_images(names: &[&str]) -> Self {
        let fake = Self::default();
        *fake.images.lock().unwrap() = names.iter().map(|n| image(n)).collect();
        fake
    }

    pub fn calls(&self, op: &'static str) -> usize {
        self.calls.lock().unwrap().get(op).copied().unwrap_or(0)
    }

    fn hit(&self, op: &'static str) {
        *self.calls.lock().unwrap().entry(op).or_default() += 1;
    }

    fn write_guard(&self) -> ApiResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ApiError::Server {
                status: 500,
                message: "Database unavailable".into(),
            });
        }
        if self.token.lock().unwrap().is_none() {
            return Err(ApiError::Server {
                status: 401,
                message: "Authorization header must be: Bearer <token>".into(),
            });
        }
        Ok(())
    }
}

pub fn service(name: &str) -> Service {
    let now = Utc::now();
    Service {
        id: Uuid::new_v4(),
        name: name.into(),
        description: format!("{name} description"),
        detailed_description: None,
        price: "from 1000 ₽".into(),
        images: vec![format!("https://img.example/{name}.jpg")].into(),
        created_at: now,
        updated_at: now,
    }
}

pub fn image(name: &str) -> UploadedImage {
    let id = Uuid::new_v4();
    UploadedImage {
        id,
        filename: format!("{id}.png"),
        original_filename: name.into(),
        url: format!("/uploads/{id}.png"),
        size: 1024,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl Backend for FakeBackend {
    fn set_token(&mut self, token: Option<String>) {
        *self.token.get_mut().unwrap() = token;
    }

    async fn list_services(&self) -> ApiResult<Vec<Service>> {
        self.hit("list_services");
        Ok(self.services.lock().unwrap().clone())
    }

    async fn create_service(&self, input: &ServiceInput) -> ApiResult<Service> {
        self.hit("create_service");
        self.write_guard()?;
        let now = Utc::now();
        let created = Service {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            description: input.description.clone(),
            detailed_description: input.detailed_description.clone(),
            price: input.price.clone(),
            images: input.images.clone().into(),
            created_at: now,
            updated_at: now,
        };
        self.services.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_service(&self, id: Uuid, input: &ServiceInput) -> ApiResult<Service> {
        self.hit("update_service");
        self.write_guard()?;
        let mut services = self.services.lock().unwrap();
        let Some(existing) = services.iter_mut().find(|s| s.id == id) else {
            return Err(ApiError::Server {
                status: 404,
                message: "Service not found".into(),
            });
        };
        existing.name = input.name.clone();
        existing.description = input.description.clone();
        existing.detailed_description = input.detailed_description.clone();
        existing.price = input.price.clone();
        existing.images = input.images.clone().into();
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn delete_service(&self, id: Uuid) -> ApiResult<ActionResponse> {
        self.hit("delete_service");
        self.write_guard()?;
        let mut services = self.services.lock().unwrap();
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            return Err(ApiError::Server {
                status: 404,
                message: "Service not found".into(),
            });
        }
        Ok(ActionResponse::ok("Service deleted successfully"))
    }

    async fn list_portfolio(&self) -> ApiResult<Vec<PortfolioItem>> {
        self.hit("list_portfolio");
        Ok(self.portfolio.lock().unwrap().clone())
    }

    async fn create_portfolio(&self, input: &PortfolioInput) -> ApiResult<PortfolioItem> {
        self.hit("create_portfolio");
        self.write_guard()?;
        let now = Utc::now();
        let created = PortfolioItem {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            image: input.image.clone(),
            category: input.category.clone(),
            created_at: now,
            updated_at: now,
        };
        self.portfolio.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_portfolio(&self, id: Uuid, input: &PortfolioInput) -> ApiResult<PortfolioItem> {
        self.hit("update_portfolio");
        self.write_guard()?;
        let mut items = self.portfolio.lock().unwrap();
        let Some(existing) = items.iter_mut().find(|p| p.id == id) else {
            return Err(ApiError::Server {
                status: 404,
                message: "Portfolio item not found".into(),
            });
        };
        existing.title = input.title.clone();
        existing.image = input.image.clone();
        existing.category = input.category.clone();
        Ok(existing.clone())
    }

    async fn delete_portfolio(&self, id: Uuid) -> ApiResult<ActionResponse> {
        self.hit("delete_portfolio");
        self.write_guard()?;
        self.portfolio.lock().unwrap().retain(|p| p.id != id);
        Ok(ActionResponse::ok("Portfolio item deleted successfully"))
    }

    async fn get_contacts(&self) -> ApiResult<Contacts> {
        self.hit("get_contacts");
        self.contacts.lock().unwrap().clone().ok_or(ApiError::Server {
            status: 404,
            message: "Contacts not found".into(),
        })
    }

    async fn update_contacts(&self, contacts: &Contacts) -> ApiResult<Contacts> {
        self.hit("update_contacts");
        self.write_guard()?;
        let mut saved = contacts.clone();
        saved.updated_at = Some(Utc::now());
        *self.contacts.lock().unwrap() = Some(saved.clone());
        Ok(saved)
    }

    async fn login(&self, credentials: &AdminLogin) -> ApiResult<AdminResponse> {
        self.hit("login");
        if credentials.login == ADMIN_LOGIN && credentials.password == ADMIN_PASSWORD {
            let issued_at = Utc::now();
            Ok(AdminResponse {
                success: true,
                message: "Login successful".into(),
                token: Some("fake-token".into()),
                issued_at: Some(issued_at),
                expires_at: Some(issued_at + Duration::hours(1)),
            })
        } else {
            Ok(AdminResponse {
                success: false,
                message: "Invalid credentials".into(),
                token: None,
                issued_at: None,
                expires_at: None,
            })
        }
    }

    async fn upload_image(&self, file: &UploadFile) -> ApiResult<ImageUploadResponse> {
        self.hit("upload_image");
        self.write_guard()?;
        let mut stored = image(&file.file_name);
        stored.size = file.bytes.len() as i64;
        self.images.lock().unwrap().push(stored.clone());
        Ok(ImageUploadResponse {
            success: true,
            message: "Image uploaded successfully".into(),
            image: Some(stored),
        })
    }

    async fn list_images(&self) -> ApiResult<Vec<UploadedImage>> {
        self.hit("list_images");
        Ok(self.images.lock().unwrap().clone())
    }

    async fn delete_image(&self, id: Uuid) -> ApiResult<ActionResponse> {
        self.hit("delete_image");
        self.write_guard()?;
        self.images.lock().unwrap().retain(|i| i.id != id);
        Ok(ActionResponse::ok("Image deleted successfully"))
    }
}
