use async_trait::async_trait;
use uuid::Uuid;

use crate::client::{ApiResult, Backend};
use crate::models::portfolio::PortfolioInput;
use crate::models::services::ServiceInput;
use crate::models::{PortfolioItem, Service};

/// A backend collection a [`CrudPanel`](super::panel::CrudPanel) can edit.
#[async_trait]
pub trait Collection: Send + Sync + 'static {
    type Entity: Clone + Send + Sync + 'static;
    type Input: Clone + Default + Send + Sync + 'static;

    /// Human name used in notices, e.g. "Service".
    const NOUN: &'static str;

    fn id(entity: &Self::Entity) -> Uuid;
    fn input_of(entity: &Self::Entity) -> Self::Input;

    async fn fetch<B: Backend>(backend: &B) -> ApiResult<Vec<Self::Entity>>;
    async fn create<B: Backend>(backend: &B, input: &Self::Input) -> ApiResult<Self::Entity>;
    async fn replace<B: Backend>(
        backend: &B,
        id: Uuid,
        input: &Self::Input,
    ) -> ApiResult<Self::Entity>;
    async fn remove<B: Backend>(backend: &B, id: Uuid) -> ApiResult<()>;
}

pub struct Services;

#[async_trait]
impl Collection for Services {
    type Entity = Service;
    type Input = ServiceInput;

    const NOUN: &'static str = "Service";

    fn id(entity: &Service) -> Uuid {
        entity.id
    }

    fn input_of(entity: &Service) -> ServiceInput {
        entity.to_input()
    }

    async fn fetch<B: Backend>(backend: &B) -> ApiResult<Vec<Service>> {
        backend.list_services().await
    }

    async fn create<B: Backend>(backend: &B, input: &ServiceInput) -> ApiResult<Service> {
        backend.create_service(input).await
    }

    async fn replace<B: Backend>(backend: &B, id: Uuid, input: &ServiceInput) -> ApiResult<Service> {
        backend.update_service(id, input).await
    }

    async fn remove<B: Backend>(backend: &B, id: Uuid) -> ApiResult<()> {
        backend.delete_service(id).await.map(|_| ())
    }
}

pub struct Portfolio;

#[async_trait]
impl Collection for Portfolio {
    type Entity = PortfolioItem;
    type Input = PortfolioInput;

    const NOUN: &'static str = "Portfolio item";

    fn id(entity: &PortfolioItem) -> Uuid {
        entity.id
    }

    fn input_of(entity: &PortfolioItem) -> PortfolioInput {
        entity.to_input()
    }

    async fn fetch<B: Backend>(backend: &B) -> ApiResult<Vec<PortfolioItem>> {
        backend.list_portfolio().await
    }

    async fn create<B: Backend>(backend: &B, input: &PortfolioInput) -> ApiResult<PortfolioItem> {
        backend.create_portfolio(input).await
    }

    async fn replace<B: Backend>(
        backend: &B,
        id: Uuid,
        input: &PortfolioInput,
    ) -> ApiResult<PortfolioItem> {
        backend.update_portfolio(id, input).await
    }

    async fn remove<B: Backend>(backend: &B, id: Uuid) -> ApiResult<()> {
        backend.delete_portfolio(id).await.map(|_| ())
    }
}
