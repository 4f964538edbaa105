//! Run report: the JSON contract consumed by the storefront plus the
//! operator-facing console rendering and the manual-correction SQL script.

use crate::group_id;
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use vg_types::group::VariantGroup;
use vg_types::VariantTag;

#[derive(Debug, Serialize)]
pub struct VariantReport {
    pub total_products: usize,
    pub groups_found: usize,
    pub groups: BTreeMap<String, GroupEntry>,
}

#[derive(Debug, Serialize)]
pub struct GroupEntry {
    pub base_name: String,
    pub products: Vec<ProductEntry>,
}

#[derive(Debug, Serialize)]
pub struct ProductEntry {
    pub id: i32,
    pub title: String,
    pub color_variant: VariantTag,
    pub stock_quantity: i32,
    pub category: String,
    pub supplier_article: String,
}

impl VariantReport {
    /// `total_products` is the snapshot size, including rows that ended up
    /// ungroupable; `groups` carries only the accepted buckets.
    pub fn new(total_products: usize, groups: Vec<VariantGroup>) -> Self {
        let mut map = BTreeMap::new();
        for group in groups {
            let group_id = free_group_id(group.group_id, &map);
            let products = group
                .members
                .into_iter()
                .map(|m| ProductEntry {
                    id: m.product_id,
                    title: m.title,
                    color_variant: m.variant,
                    stock_quantity: m.stock_quantity,
                    category: m.category.unwrap_or_default(),
                    supplier_article: m.supplier_article.unwrap_or_default(),
                })
                .collect();
            map.insert(
                group_id,
                GroupEntry {
                    base_name: group.base_name,
                    products,
                },
            );
        }
        Self {
            total_products,
            groups_found: map.len(),
            groups: map,
        }
    }

    /// Console report for the operator, largest groups first.
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(80);
        let grouped: usize = self.groups.values().map(|g| g.products.len()).sum();

        let mut out = String::new();
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "АНАЛИЗ ВАРИАНТОВ ТОВАРОВ");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out);
        let _ = writeln!(out, "СТАТИСТИКА:");
        let _ = writeln!(out, "  Всего товаров без группы: {}", self.total_products);
        let _ = writeln!(out, "  Найдено групп для объединения: {}", self.groups_found);
        let _ = writeln!(out, "  Товаров будет сгруппировано: {grouped}");
        let _ = writeln!(out);

        let by_size = self
            .groups
            .iter()
            .sorted_by_key(|(_, entry)| Reverse(entry.products.len()));
        for (index, (group_id, entry)) in by_size.enumerate() {
            let _ = writeln!(out, "ГРУППА {}: {group_id}", index + 1);
            let _ = writeln!(out, "Базовое название: {}", entry.base_name);
            let _ = writeln!(out, "Количество вариантов: {}", entry.products.len());
            let _ = writeln!(out, "{}", "-".repeat(80));
            for product in &entry.products {
                let badge = if product.stock_quantity > 0 { '✓' } else { '✗' };
                let _ = writeln!(
                    out,
                    "  [{badge}] ID {} → color_variant: \"{}\"",
                    product.id, product.color_variant
                );
                let _ = writeln!(out, "      Название: {}", product.title);
                let _ = writeln!(
                    out,
                    "      Остаток: {} | Категория: {} | Артикул: {}",
                    product.stock_quantity,
                    not_empty(&product.category, "не указана"),
                    not_empty(&product.supplier_article, "нет"),
                );
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out);
        let _ = writeln!(out, "ИНСТРУКЦИЯ ПО ПРИМЕНЕНИЮ:");
        let _ = writeln!(out, "Для каждой группы выполните SQL UPDATE:");
        let _ = writeln!(
            out,
            "UPDATE products SET variant_group_id = '<group_id>', \
             color_variant = '<color_variant>' WHERE id = <product_id>;"
        );
        out
    }

    /// UPDATE script for the catalog owner; the engine itself never writes
    /// back.
    pub fn sql_statements(&self) -> String {
        let mut out = String::new();
        for (group_id, entry) in &self.groups {
            let _ = writeln!(out, "-- {}", entry.base_name);
            for product in &entry.products {
                let _ = writeln!(
                    out,
                    "UPDATE products SET variant_group_id = '{}', color_variant = '{}' WHERE id = {};",
                    sql_literal(group_id),
                    sql_literal(&product.color_variant.to_string()),
                    product.id,
                );
            }
        }
        out
    }
}

fn not_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Unrelated base names can transliterate to the same slug; the first group
/// keeps it, later ones get a numeric suffix, shortened to stay within the
/// id length limit.
fn free_group_id(id: String, taken: &BTreeMap<String, GroupEntry>) -> String {
    if !taken.contains_key(&id) {
        return id;
    }
    let mut n = 2usize;
    loop {
        let suffix = format!("-{n}");
        let stem: String = id
            .chars()
            .take(group_id::MAX_LEN.saturating_sub(suffix.len()))
            .collect();
        let candidate = format!("{stem}{suffix}");
        if !taken.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vg_types::group::GroupMember;

    fn member(id: i32, title: &str, tag: VariantTag, stock: i32) -> GroupMember {
        GroupMember {
            product_id: id,
            title: title.to_string(),
            variant: tag,
            stock_quantity: stock,
            category: None,
            supplier_article: None,
        }
    }

    fn group(group_id: &str, base_name: &str, members: Vec<GroupMember>) -> VariantGroup {
        VariantGroup {
            group_id: group_id.to_string(),
            base_name: base_name.to_string(),
            members,
        }
    }

    fn sample() -> VariantGroup {
        group(
            "komod-solo",
            "Комод Соло",
            vec![
                member(1, "Комод Соло белый", VariantTag::Color("white"), 2),
                member(2, "Комод Соло венге", VariantTag::Color("wenge"), 0),
            ],
        )
    }

    #[test]
    fn counts_cover_the_whole_snapshot() {
        let report = VariantReport::new(5, vec![sample()]);
        assert_eq!(report.total_products, 5);
        assert_eq!(report.groups_found, 1);
        assert_eq!(report.groups["komod-solo"].products.len(), 2);
    }

    #[test]
    fn serializes_the_original_wire_format() {
        let report = VariantReport::new(3, vec![sample()]);
        let value = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(value["total_products"], 3);
        assert_eq!(value["groups_found"], 1);
        let product = &value["groups"]["komod-solo"]["products"][0];
        assert_eq!(product["id"], 1);
        assert_eq!(product["color_variant"], "white");
        assert_eq!(product["stock_quantity"], 2);
        // Absent category and article come out as empty strings, not null.
        assert_eq!(product["category"], "");
        assert_eq!(product["supplier_article"], "");
    }

    #[test]
    fn colliding_slugs_get_numeric_suffixes() {
        let a = group(
            "krovat-vega",
            "Кровать Вега",
            vec![
                member(1, "Кровать Вега (1400)", VariantTag::Size("1400".to_string()), 1),
                member(2, "Кровать Вега (1600)", VariantTag::Size("1600".to_string()), 1),
            ],
        );
        let mut b = a.clone();
        b.base_name = "Кровать Вега-2".to_string();
        let report = VariantReport::new(4, vec![a, b]);
        assert_eq!(report.groups_found, 2);
        assert!(report.groups.contains_key("krovat-vega"));
        assert!(report.groups.contains_key("krovat-vega-2"));
    }

    #[test]
    fn suffixed_ids_respect_the_length_limit() {
        let long_id = "a".repeat(group_id::MAX_LEN);
        let a = group(&long_id, "База", vec![]);
        let b = group(&long_id, "База прим", vec![]);
        let report = VariantReport::new(0, vec![a, b]);
        assert!(report.groups.keys().all(|id| id.len() <= group_id::MAX_LEN));
        assert_eq!(report.groups.len(), 2);
    }

    #[test]
    fn text_report_lists_largest_groups_first() {
        let big = group(
            "stenka-gotika",
            "Стенка Готика",
            vec![
                member(3, "Стенка Готика (2400)", VariantTag::Size("2400".to_string()), 1),
                member(4, "Стенка Готика (2800)", VariantTag::Size("2800".to_string()), 0),
                member(5, "Стенка Готика (3200)", VariantTag::Size("3200".to_string()), 0),
            ],
        );
        let text = VariantReport::new(5, vec![sample(), big]).render_text();
        assert!(text.contains("АНАЛИЗ ВАРИАНТОВ ТОВАРОВ"));
        assert!(text.contains("Найдено групп для объединения: 2"));
        assert!(text.contains("Товаров будет сгруппировано: 5"));
        assert!(text.contains("ГРУППА 1: stenka-gotika"));
        assert!(text.contains("ГРУППА 2: komod-solo"));
        assert!(text.contains("[✓] ID 1 → color_variant: \"white\""));
        assert!(text.contains("[✗] ID 2"));
        assert!(text.contains("ИНСТРУКЦИЯ ПО ПРИМЕНЕНИЮ:"));
    }

    #[test]
    fn sql_script_targets_each_member() {
        let sql = VariantReport::new(2, vec![sample()]).sql_statements();
        assert!(sql.contains(
            "UPDATE products SET variant_group_id = 'komod-solo', color_variant = 'white' WHERE id = 1;"
        ));
        assert!(sql.contains(
            "UPDATE products SET variant_group_id = 'komod-solo', color_variant = 'wenge' WHERE id = 2;"
        ));
    }
}
