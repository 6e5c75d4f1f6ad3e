use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::client::Backend;
use crate::client::error::{ApiError, ApiResult};
use crate::config::ClientConfig;
use crate::gallery::upload::UploadFile;
use crate::models::admin::{ActionResponse, AdminLogin, AdminResponse};
use crate::models::portfolio::PortfolioInput;
use crate::models::services::ServiceInput;
use crate::models::uploaded_images::ImageUploadResponse;
use crate::models::{Contacts, PortfolioItem, Service, UploadedImage};

/// HTTP implementation of [`Backend`] against `{BACKEND_URL}/api`.
///
/// One call per method, no retries, no client-side timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    api_root: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: Client::new(),
            api_root: config.api_root(),
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed before a response: {e}");
            ApiError::from_transport(e)
        })?;

        let status = response.status();
        tracing::debug!("{} {}", status.as_u16(), response.url());

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        response.json::<T>().await.map_err(ApiError::from_transport)
    }
}

#[async_trait]
impl Backend for ApiClient {
    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    async fn list_services(&self) -> ApiResult<Vec<Service>> {
        self.send(self.http.get(self.url("/services"))).await
    }

    async fn create_service(&self, input: &ServiceInput) -> ApiResult<Service> {
        let request = self.http.post(self.url("/services")).json(input);
        self.send(self.authorized(request)).await
    }

    async fn update_service(&self, id: Uuid, input: &ServiceInput) -> ApiResult<Service> {
        let request = self.http.put(self.url(&format!("/services/{id}"))).json(input);
        self.send(self.authorized(request)).await
    }

    async fn delete_service(&self, id: Uuid) -> ApiResult<ActionResponse> {
        let request = self.http.delete(self.url(&format!("/services/{id}")));
        self.send(self.authorized(request)).await
    }

    async fn list_portfolio(&self) -> ApiResult<Vec<PortfolioItem>> {
        self.send(self.http.get(self.url("/portfolio"))).await
    }

    async fn create_portfolio(&self, input: &PortfolioInput) -> ApiResult<PortfolioItem> {
        let request = self.http.post(self.url("/portfolio")).json(input);
        self.send(self.authorized(request)).await
    }

    async fn update_portfolio(&self, id: Uuid, input: &PortfolioInput) -> ApiResult<PortfolioItem> {
        let request = self.http.put(self.url(&format!("/portfolio/{id}"))).json(input);
        self.send(self.authorized(request)).await
    }

    async fn delete_portfolio(&self, id: Uuid) -> ApiResult<ActionResponse> {
        let request = self.http.delete(self.url(&format!("/portfolio/{id}")));
        self.send(self.authorized(request)).await
    }

    async fn get_contacts(&self) -> ApiResult<Contacts> {
        self.send(self.http.get(self.url("/contacts"))).await
    }

    async fn update_contacts(&self, contacts: &Contacts) -> ApiResult<Contacts> {
        let request = self.http.put(self.url("/contacts")).json(contacts);
        self.send(self.authorized(request)).await
    }

    async fn login(&self, credentials: &AdminLogin) -> ApiResult<AdminResponse> {
        self.send(self.http.post(self.url("/admin/login")).json(credentials))
            .await
    }

    async fn upload_image(&self, file: &UploadFile) -> ApiResult<ImageUploadResponse> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(ApiError::from_transport)?;
        let form = Form::new().part("file", part);

        let request = self.http.post(self.url("/upload-image")).multipart(form);
        self.send(self.authorized(request)).await
    }

    async fn list_images(&self) -> ApiResult<Vec<UploadedImage>> {
        self.send(self.http.get(self.url("/uploaded-images"))).await
    }

    async fn delete_image(&self, id: Uuid) -> ApiResult<ActionResponse> {
        let request = self.http.delete(self.url(&format!("/uploaded-images/{id}")));
        self.send(self.authorized(request)).await
    }
}
