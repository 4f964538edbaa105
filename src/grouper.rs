//! The clustering pass: buckets catalog rows by base name and keeps only
//! buckets that look like genuine variant families.

use crate::group_id::GroupIdGenerator;
use crate::normalizer::Normalizer;
use crate::patterns;
use crate::variant::VariantExtractor;
use crate::vocab::Vocabulary;
use std::collections::HashMap;
use vg_types::group::{GroupMember, VariantGroup};
use vg_types::product::ProductRow;

pub struct VariantEngine {
    normalizer: Normalizer,
    extractor: VariantExtractor,
    ids: GroupIdGenerator,
}

impl VariantEngine {
    pub fn new(vocab: &Vocabulary) -> Result<Self, anyhow::Error> {
        Ok(Self {
            normalizer: Normalizer::new(vocab)?,
            extractor: VariantExtractor::new(vocab)?,
            ids: GroupIdGenerator::new(vocab),
        })
    }

    /// Single clustering pass over a catalog snapshot.
    ///
    /// Rows whose title collapses to an empty base name are ungroupable and
    /// skipped; they still count toward the caller's total. Buckets are kept
    /// in first-seen order so repeated runs over the same snapshot emit the
    /// same groups in the same order.
    pub fn analyze(&self, rows: &[ProductRow]) -> Vec<VariantGroup> {
        let mut buckets: Vec<(String, Vec<&ProductRow>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let base = self.normalizer.base_name(&row.title);
            if base.is_empty() {
                log::debug!("Product {} has no stable base name: {:?}", row.id, row.title);
                continue;
            }
            match index.get(&base) {
                Some(&i) => buckets[i].1.push(row),
                None => {
                    index.insert(base.clone(), buckets.len());
                    buckets.push((base, vec![row]));
                }
            }
        }

        buckets
            .into_iter()
            .filter_map(|(base, members)| self.build_group(base, &members))
            .collect()
    }

    fn build_group(&self, base_name: String, members: &[&ProductRow]) -> Option<VariantGroup> {
        if members.len() < 2 {
            return None;
        }
        if !any_member_in_stock(members) && !self.has_explicit_variant_signal(members) {
            // Coincidental title collision of discontinued rows, not a family.
            log::debug!(
                "Discarding bucket {:?}: {} members, no stock, no variant signal",
                base_name,
                members.len()
            );
            return None;
        }

        let first = members.first()?;
        let group_id = self.ids.generate(&base_name, &first.title);
        let members = members
            .iter()
            .map(|row| GroupMember {
                product_id: row.id,
                title: row.title.clone(),
                variant: self.extractor.extract(&row.title),
                stock_quantity: row.stock_quantity,
                category: row.category.clone(),
                supplier_article: row.supplier_article.clone(),
            })
            .collect();

        Some(VariantGroup {
            group_id,
            base_name,
            members,
        })
    }

    /// Acceptance disjunct: the titles themselves spell out color or size
    /// variants.
    fn has_explicit_variant_signal(&self, members: &[&ProductRow]) -> bool {
        members.iter().any(|row| {
            self.normalizer.has_color_word(&row.title) || patterns::SIZE_CODE.is_match(&row.title)
        })
    }
}

/// Acceptance disjunct: somebody actually sells this family right now.
fn any_member_in_stock(members: &[&ProductRow]) -> bool {
    members.iter().any(|row| row.stock_quantity > 0)
}
