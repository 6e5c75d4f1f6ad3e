use sea_orm::*;

use crate::db::{contacts as contacts_db, portfolio as portfolio_db, services as services_db};
use crate::models::contacts::Contacts;
use crate::models::portfolio::{self, PortfolioInput};
use crate::models::services::{self, ServiceInput};

/// Insert default content into empty tables so a fresh deployment renders a full page.
pub async fn initialize_default_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if contacts_db::get_contacts(db).await?.is_none() {
        contacts_db::replace_contacts(db, default_contacts()).await?;
        tracing::info!("Seeded default contacts");
    }

    if services::Entity::find().count(db).await? == 0 {
        for service in default_services() {
            services_db::insert_service(db, service).await?;
        }
        tracing::info!("Seeded default services");
    }

    if portfolio::Entity::find().count(db).await? == 0 {
        for item in default_portfolio() {
            portfolio_db::insert_portfolio(db, item).await?;
        }
        tracing::info!("Seeded default portfolio");
    }

    Ok(())
}

fn default_contacts() -> Contacts {
    Contacts {
        name: "Knyazhiy Terem".into(),
        tagline: "Masters of fine wood finishing".into(),
        phone: "+7 (999) 123-45-67".into(),
        whatsapp: "79991234567".into(),
        email: "info@knyazhiy-terem.ru".into(),
        updated_at: None,
    }
}

fn unsplash(photo: &str, w: u32, h: u32) -> String {
    format!("https://images.unsplash.com/{photo}?w={w}&h={h}&fit=crop")
}

fn default_services() -> Vec<ServiceInput> {
    vec![
        ServiceInput {
            name: "Timber bathhouse".into(),
            description: "Construction and finishing of bathhouses from quality timber, from foundation to final trim.".into(),
            detailed_description: Some("Northern-grown timber only. Every bathhouse is built to the client's wishes; materials, delivery and installation are included, with a three-year warranty. Interior finishing, stove installation and plumbing on request.".into()),
            price: "from 500 000 ₽".into(),
            images: vec![
                unsplash("photo-1571502973714-8c2b0cc0b7ee", 400, 300),
                unsplash("photo-1542078753-9b3ec0a9b6d5", 400, 300),
            ],
        },
        ServiceInput {
            name: "Wooden gazebo".into(),
            description: "Made-to-order wooden gazebos in any size and design.".into(),
            detailed_description: Some("Pine, larch or oak. Ready-made projects or a custom design, optionally with furniture and lighting. Every structure is treated against moisture and insects.".into()),
            price: "from 150 000 ₽".into(),
            images: vec![
                unsplash("photo-1600585154526-990dced4db0d", 400, 300),
                unsplash("photo-1600047509807-ba8f99d2cdde", 400, 300),
            ],
        },
        ServiceInput {
            name: "House wood finishing".into(),
            description: "Interior and exterior finishing of houses with natural wood.".into(),
            detailed_description: Some("Lining, imitation timber, block house and solid boards. A project with a material estimate comes first; skirting, casings and decorative elements on request.".into()),
            price: "from 2000 ₽/m²".into(),
            images: vec![
                unsplash("photo-1513594736757-3c44df5db6a9", 400, 300),
                unsplash("photo-1600563438938-a9e2e2a35470", 400, 300),
            ],
        },
        ServiceInput {
            name: "Wooden furniture".into(),
            description: "Custom solid-wood furniture: tables, chairs, wardrobes, beds.".into(),
            detailed_description: Some("Oak, ash, birch and pine, finished with eco-friendly coatings. Sketches and 3D renders before work starts; delivery and assembly included.".into()),
            price: "from 30 000 ₽".into(),
            images: vec![
                unsplash("photo-1586023492125-27b2c045efd7", 400, 300),
                unsplash("photo-1542744173-05336fcc7ad4", 400, 300),
            ],
        },
    ]
}

fn default_portfolio() -> Vec<PortfolioInput> {
    [
        ("Russian bathhouse", "photo-1571502973714-8c2b0cc0b7ee", "Bathhouses"),
        ("Garden gazebo", "photo-1600585154526-990dced4db0d", "Gazebos"),
        ("Wood paneling", "photo-1513594736757-3c44df5db6a9", "Finishing"),
        ("Kitchen set", "photo-1586023492125-27b2c045efd7", "Furniture"),
        ("Terrace", "photo-1600047509807-ba8f99d2cdde", "Terraces"),
        ("Wooden table", "photo-1542744173-05336fcc7ad4", "Furniture"),
    ]
    .into_iter()
    .map(|(title, photo, category)| PortfolioInput {
        title: title.into(),
        image: unsplash(photo, 600, 400),
        category: category.into(),
    })
    .collect()
}
