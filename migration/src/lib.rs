pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_services_table;
mod m20250301_000002_create_portfolio_table;
mod m20250301_000003_create_contacts_table;
mod m20250302_000001_create_uploaded_images_table;
mod m20250303_000001_add_created_at_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_services_table::Migration),
            Box::new(m20250301_000002_create_portfolio_table::Migration),
            Box::new(m20250301_000003_create_contacts_table::Migration),
            Box::new(m20250302_000001_create_uploaded_images_table::Migration),
            Box::new(m20250303_000001_add_created_at_indexes::Migration),
        ]
    }
}
