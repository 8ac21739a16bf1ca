use crate::models::{CatalogEntry, Category, GiftRequest, PriceRange};

/// Relationship fragments that mark the recipient as a parent
const PARENT_TOKENS: [&str; 5] = ["parent", "mom", "dad", "mother", "father"];

/// Applies the hard constraints of a request to the catalog
///
/// Keeps entries whose base price lies inside the request's budget range and
/// drops gaming accessories for parents. Catalog order is preserved and
/// nothing is ever added.
pub fn filter_candidates<'a>(
    catalog: &'a [CatalogEntry],
    request: &GiftRequest,
) -> Vec<&'a CatalogEntry> {
    let budget = request.budget_bucket().range();
    let for_parent = is_parent(&request.relationship);

    let candidates: Vec<&CatalogEntry> = catalog
        .iter()
        .filter(|entry| within_budget(entry, budget))
        .filter(|entry| !(for_parent && is_gaming_accessory(entry)))
        .collect();

    tracing::debug!(
        budget = %request.budget_bucket(),
        for_parent,
        kept = candidates.len(),
        total = catalog.len(),
        "Filtered catalog"
    );

    candidates
}

fn within_budget(entry: &CatalogEntry, budget: PriceRange) -> bool {
    budget.contains(entry.base_price)
}

fn is_parent(relationship: &str) -> bool {
    let relationship = relationship.to_lowercase();
    PARENT_TOKENS.iter().any(|token| relationship.contains(token))
}

fn is_gaming_accessory(entry: &CatalogEntry) -> bool {
    entry.category == Category::Gaming && entry.subcategory == "Accessories"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetBucket;
    use crate::services::catalog::catalog;

    fn request(relationship: &str, budget: &str) -> GiftRequest {
        GiftRequest {
            recipient_name: "Sam".to_string(),
            age: 30,
            relationship: relationship.to_string(),
            occasion: "birthday".to_string(),
            budget: budget.to_string(),
            interests: "gaming, tech".to_string(),
        }
    }

    #[test]
    fn test_filter_respects_budget_range() {
        for bucket in BudgetBucket::ALL {
            let req = request("friend", bucket.label());
            let range = bucket.range();
            for entry in filter_candidates(catalog(), &req) {
                assert!(range.contains(entry.base_price), "{} leaked into {}", entry.name, bucket);
            }
        }
    }

    #[test]
    fn test_unknown_budget_uses_mid_range() {
        let req = request("friend", "whatever fits");
        let candidates = filter_candidates(catalog(), &req);
        assert!(!candidates.is_empty());
        assert!(candidates
            .iter()
            .all(|e| (1_000..=5_000).contains(&e.base_price)));
    }

    #[test]
    fn test_parents_do_not_get_gaming_accessories() {
        let friend = filter_candidates(catalog(), &request("friend", "₹1,000 - ₹5,000"));
        assert!(friend.iter().any(|e| e.name == "Gaming Headset Pro"));

        for relationship in ["parent", "Mom", "grand-dad", "family-member (mother)"] {
            let parent = filter_candidates(catalog(), &request(relationship, "₹1,000 - ₹5,000"));
            assert!(
                !parent.iter().any(|e| is_gaming_accessory(e)),
                "gaming accessory offered to {}",
                relationship
            );
        }
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let req = request("friend", "₹1,000 - ₹5,000");
        let candidates = filter_candidates(catalog(), &req);
        let positions: Vec<usize> = candidates
            .iter()
            .map(|c| catalog().iter().position(|e| e.name == c.name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let req = request("dad", "₹5,000 - ₹10,000");
        let first: Vec<CatalogEntry> = filter_candidates(catalog(), &req)
            .into_iter()
            .cloned()
            .collect();
        let second = filter_candidates(&first, &req);
        assert_eq!(second.len(), first.len());
        assert!(second.iter().zip(first.iter()).all(|(a, b)| a.name == b.name));
    }
}
