use crate::VariantTag;

/// A cluster of catalog rows judged to be the same product in different
/// variants. Created only for buckets of two or more rows that pass the
/// acceptance filter; recomputed fresh on every run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantGroup {
    pub group_id: String,
    pub base_name: String,
    pub members: Vec<GroupMember>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupMember {
    pub product_id: i32,
    pub title: String,
    pub variant: VariantTag,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub supplier_article: Option<String>,
}
