use typesafe_repository::async_ops::Select;
use typesafe_repository::macros::Id;
use typesafe_repository::prelude::*;
use typesafe_repository::{SelectBy, Selector};

/// Catalog row as owned by the external products store. Immutable input to
/// the engine; grouping decisions are written back by a collaborator.
#[derive(Id, Clone, Debug)]
pub struct ProductRow {
    #[id]
    pub id: i32,
    pub title: String,
    pub supplier_article: Option<String>,
    pub category: Option<String>,
    pub stock_quantity: i32,
}

/// Rows that have not been assigned to a variant group yet.
pub struct Ungrouped;

impl Selector for Ungrouped {}

impl SelectBy<Ungrouped> for ProductRow {}

pub trait CatalogRepository:
    Repository<ProductRow, Error = anyhow::Error>
    + Select<ProductRow, Ungrouped>
    + Send
    + Sync
{
}
