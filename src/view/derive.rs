//! Pure derivation of what a product listing shows from its inputs.

use std::collections::BTreeSet;

use crate::product::Product;

/// Distinct categories of `products`, sorted ascending.
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|product| product.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Products matching both the category and the search term, in source order.
///
/// `category` must match exactly. The search term is trimmed and compared
/// case-insensitively against title and category; a blank term matches
/// everything.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: Option<&str>,
    search_term: &str,
) -> Vec<&'a Product> {
    let term = search_term.trim().to_lowercase();
    products
        .iter()
        .filter(|product| category.map_or(true, |category| product.category == category))
        .filter(|product| term.is_empty() || matches_term(product, &term))
        .collect()
}

/// `term` must already be lower-cased.
fn matches_term(product: &Product, term: &str) -> bool {
    product.title.to_lowercase().contains(term) || product.category.to_lowercase().contains(term)
}
