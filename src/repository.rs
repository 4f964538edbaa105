//! Read side of the external catalog store. The engine only ever issues one
//! bulk query per run; write-back of grouping decisions belongs to the
//! catalog owner.

use crate::SqlWrapper;
use anyhow::Context;
use async_trait::async_trait;
use derive_more::Constructor;
use std::sync::Arc;
use tokio_postgres::Row;
use typesafe_repository::async_ops::Select;
use typesafe_repository::prelude::*;
use vg_types::product::{CatalogRepository, ProductRow, Ungrouped};

#[derive(Constructor)]
pub struct PostgresCatalogRepository {
    client: Arc<tokio_postgres::Client>,
}

impl Repository<ProductRow> for PostgresCatalogRepository {
    type Error = anyhow::Error;
}

impl TryFrom<Row> for SqlWrapper<ProductRow> {
    type Error = anyhow::Error;

    fn try_from(r: Row) -> Result<Self, Self::Error> {
        Ok(SqlWrapper(ProductRow {
            id: r.try_get("id")?,
            title: r.try_get("title")?,
            supplier_article: r.try_get("supplier_article")?,
            category: r.try_get("category")?,
            stock_quantity: r
                .try_get::<_, Option<i32>>("stock_quantity")?
                .unwrap_or(0),
        }))
    }
}

#[async_trait]
impl Select<ProductRow, Ungrouped> for PostgresCatalogRepository {
    async fn select(&self, _: &Ungrouped) -> Result<Vec<ProductRow>, anyhow::Error> {
        self.client
            .query(
                "SELECT id, title, supplier_article, category, stock_quantity \
                 FROM products \
                 WHERE variant_group_id IS NULL OR variant_group_id = '' \
                 ORDER BY title",
                &[],
            )
            .await
            .context("Unable to load ungrouped products")?
            .into_iter()
            .map(SqlWrapper::from_sql)
            .collect()
    }
}

impl CatalogRepository for PostgresCatalogRepository {}
