pub mod api;
pub mod error;

use async_trait::async_trait;
use uuid::Uuid;

use crate::gallery::upload::UploadFile;
use crate::models::admin::{ActionResponse, AdminLogin, AdminResponse};
use crate::models::portfolio::PortfolioInput;
use crate::models::services::ServiceInput;
use crate::models::uploaded_images::ImageUploadResponse;
use crate::models::{Contacts, PortfolioItem, Service, UploadedImage};

pub use api::ApiClient;
pub use error::{ApiError, ApiResult};

/// The REST surface as seen from the admin console and the public pages:
/// one method per (resource, operation) pair.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Bearer token attached to every write from now on. `None` drops it.
    fn set_token(&mut self, token: Option<String>);

    async fn list_services(&self) -> ApiResult<Vec<Service>>;
    async fn create_service(&self, input: &ServiceInput) -> ApiResult<Service>;
    async fn update_service(&self, id: Uuid, input: &ServiceInput) -> ApiResult<Service>;
    async fn delete_service(&self, id: Uuid) -> ApiResult<ActionResponse>;

    async fn list_portfolio(&self) -> ApiResult<Vec<PortfolioItem>>;
    async fn create_portfolio(&self, input: &PortfolioInput) -> ApiResult<PortfolioItem>;
    async fn update_portfolio(&self, id: Uuid, input: &PortfolioInput) -> ApiResult<PortfolioItem>;
    async fn delete_portfolio(&self, id: Uuid) -> ApiResult<ActionResponse>;

    async fn get_contacts(&self) -> ApiResult<Contacts>;
    async fn update_contacts(&self, contacts: &Contacts) -> ApiResult<Contacts>;

    async fn login(&self, credentials: &AdminLogin) -> ApiResult<AdminResponse>;

    async fn upload_image(&self, file: &UploadFile) -> ApiResult<ImageUploadResponse>;
    async fn list_images(&self) -> ApiResult<Vec<UploadedImage>>;
    async fn delete_image(&self, id: Uuid) -> ApiResult<ActionResponse>;
}
