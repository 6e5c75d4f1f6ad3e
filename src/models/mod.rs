pub mod admin;
pub mod contacts;
pub mod portfolio;
pub mod services;
pub mod uploaded_images;

pub use contacts::Contacts;

pub type Service = services::Model;
pub type PortfolioItem = portfolio::Model;
pub type UploadedImage = uploaded_images::Model;
