use super::dto::EnrichedProduct;
use crate::enums::category_filter::CategoryFilter;
use crate::enums::user_filter::UserFilter;
use serde::{Deserialize, Serialize};

/// Состояние фильтров списка товаров
///
/// Неизменяемое значение: каждый переход принимает `self` и возвращает
/// следующее состояние. Фильтры независимы и объединяются по «И»;
/// фильтр в служебном значении (пустая строка, `All`, `None`) не применяется.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub search_text: String,
    pub selected_user: UserFilter,
    pub selected_category: Option<CategoryFilter>,
}

impl ProductFilter {
    // ------------------------------------------------------------------------
    // Переходы
    // ------------------------------------------------------------------------

    pub fn search(self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self
        }
    }

    pub fn clear_search(self) -> Self {
        self.search(String::new())
    }

    pub fn select_user(self, user: UserFilter) -> Self {
        Self {
            selected_user: user,
            ..self
        }
    }

    pub fn select_category(self, category: Option<CategoryFilter>) -> Self {
        Self {
            selected_category: category,
            ..self
        }
    }

    /// Сброс всех трёх фильтров одним переходом
    pub fn reset_all(self) -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Вычисление
    // ------------------------------------------------------------------------

    /// Поисковая строка после trim + lowercase; пустая строка отключает фильтр
    pub fn normalized_query(&self) -> String {
        self.search_text.trim().to_lowercase()
    }

    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Количество активных фильтров (0..=3)
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.normalized_query().is_empty() {
            count += 1;
        }
        if !self.selected_user.is_all() {
            count += 1;
        }
        if self.selected_category.is_some() {
            count += 1;
        }
        count
    }

    /// Отфильтровать список, сохранив исходный порядок
    pub fn apply(&self, products: &[EnrichedProduct]) -> Vec<EnrichedProduct> {
        let query = self.normalized_query();

        products
            .iter()
            .filter(|p| matches_query(p, &query))
            .filter(|p| matches_user(p, self.selected_user))
            .filter(|p| matches_category(p, self.selected_category))
            .cloned()
            .collect()
    }
}

fn matches_query(product: &EnrichedProduct, query: &str) -> bool {
    query.is_empty() || product.name().trim().to_lowercase().contains(query)
}

fn matches_user(product: &EnrichedProduct, selected: UserFilter) -> bool {
    match selected.user_name() {
        None => true,
        Some(name) => product.user_name() == Some(name),
    }
}

fn matches_category(product: &EnrichedProduct, selected: Option<CategoryFilter>) -> bool {
    match selected {
        None => true,
        Some(category) => product.category_title() == Some(category.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::aggregate::Product;
    use crate::projections::p900_product_catalog::loader::ProductCatalog;
    use crate::projections::p900_product_catalog::seed::load_seed;

    fn catalog() -> ProductCatalog {
        ProductCatalog::load().unwrap()
    }

    /// Встроенный каталог плюс товар с несуществующей категорией
    fn catalog_with_broken_reference() -> ProductCatalog {
        let seed = load_seed().unwrap();
        let mut products = seed.products.clone();
        products.push(Product::new(100, "Mystery Cola", 404));
        ProductCatalog::from_parts(&products, &seed.categories, &seed.users)
    }

    fn names(items: &[EnrichedProduct]) -> Vec<&str> {
        items.iter().map(|p| p.name()).collect()
    }

    fn is_ordered_subsequence(part: &[EnrichedProduct], full: &[EnrichedProduct]) -> bool {
        let mut rest = full.iter();
        part.iter().all(|p| rest.any(|f| f == p))
    }

    fn all_filters() -> Vec<ProductFilter> {
        let queries = ["", "milk", "  MILK ", "cola", "a", "zzz", "   "];
        let mut categories: Vec<Option<CategoryFilter>> = vec![None];
        categories.extend(CategoryFilter::all().into_iter().map(Some));

        let mut filters = Vec::new();
        for query in queries {
            for user in UserFilter::all() {
                for category in &categories {
                    filters.push(
                        ProductFilter::default()
                            .search(query)
                            .select_user(user)
                            .select_category(*category),
                    );
                }
            }
        }
        filters
    }

    #[test]
    fn test_default_filter_returns_full_list() {
        let catalog = catalog();
        let filter = ProductFilter::default();
        assert!(filter.is_default());
        assert_eq!(filter.apply(catalog.products()), catalog.products());
    }

    #[test]
    fn test_output_is_ordered_subsequence_for_all_combinations() {
        let catalog = catalog_with_broken_reference();
        for filter in all_filters() {
            let result = filter.apply(catalog.products());
            assert!(
                is_ordered_subsequence(&result, catalog.products()),
                "not a subsequence for {:?}",
                filter
            );
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = catalog_with_broken_reference();
        for filter in all_filters() {
            let once = filter.apply(catalog.products());
            assert_eq!(once, filter.apply(catalog.products()));
            assert_eq!(once, filter.apply(&once));
        }
    }

    #[test]
    fn test_search_ignores_case_and_padding() {
        let catalog = catalog();
        for query in ["milk", "MILK", "  Milk  ", "\tmIlK\n"] {
            let result = ProductFilter::default().search(query).apply(catalog.products());
            assert_eq!(names(&result), vec!["Milk"], "query {:?}", query);
            assert_eq!(result[0].category_title(), Some("Grocery"));
            assert_eq!(result[0].user_name(), Some("Anna"));
        }
    }

    #[test]
    fn test_whitespace_only_search_is_inactive() {
        let catalog = catalog();
        let filter = ProductFilter::default().search("   ");
        assert_eq!(filter.active_count(), 0);
        assert_eq!(filter.apply(catalog.products()).len(), catalog.len());
    }

    #[test]
    fn test_user_without_products_gives_empty_list() {
        let catalog = catalog();
        let result = ProductFilter::default()
            .select_user(UserFilter::Max)
            .apply(catalog.products());
        assert!(result.is_empty());
    }

    #[test]
    fn test_user_filter_matches_transitive_owner() {
        let catalog = catalog();
        let result = ProductFilter::default()
            .select_user(UserFilter::Roma)
            .apply(catalog.products());
        assert_eq!(names(&result), vec!["Coca-Cola", "Beer", "Laptop", "Pepsi Cola"]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let catalog = catalog();
        let result = ProductFilter::default()
            .select_category(Some(CategoryFilter::Drinks))
            .search("cola")
            .apply(catalog.products());

        assert_eq!(names(&result), vec!["Coca-Cola", "Pepsi Cola"]);
        assert!(result.iter().all(|p| p.category_title() == Some("Drinks")));

        // "Chocolate" содержит "cola", но относится к Grocery
        let search_only = ProductFilter::default().search("cola").apply(catalog.products());
        assert_eq!(names(&search_only), vec!["Coca-Cola", "Pepsi Cola", "Chocolate"]);
    }

    #[test]
    fn test_all_three_filters_combine() {
        let catalog = catalog();
        let filter = ProductFilter::default()
            .search("e")
            .select_user(UserFilter::Anna)
            .select_category(Some(CategoryFilter::Grocery));

        assert_eq!(filter.active_count(), 3);
        assert_eq!(names(&filter.apply(catalog.products())), vec!["Bread", "Eggs", "Chocolate"]);
    }

    #[test]
    fn test_reset_all_restores_full_list() {
        let catalog = catalog();
        let filter = ProductFilter::default()
            .search("cola")
            .select_user(UserFilter::John)
            .select_category(Some(CategoryFilter::Fruits));
        assert!(filter.apply(catalog.products()).is_empty());

        let reset = filter.reset_all();
        assert_eq!(reset, ProductFilter::default());
        assert_eq!(reset.apply(catalog.products()), catalog.products());
    }

    #[test]
    fn test_transitions_touch_only_their_field() {
        let filter = ProductFilter::default()
            .search("milk")
            .select_user(UserFilter::Anna)
            .select_category(Some(CategoryFilter::Grocery));

        let cleared = filter.clone().clear_search();
        assert_eq!(cleared.search_text, "");
        assert_eq!(cleared.selected_user, UserFilter::Anna);
        assert_eq!(cleared.selected_category, Some(CategoryFilter::Grocery));

        let all_categories = filter.clone().select_category(None);
        assert_eq!(all_categories.search_text, "milk");
        assert_eq!(all_categories.selected_category, None);

        let all_users = filter.select_user(UserFilter::All);
        assert_eq!(all_users.active_count(), 2);
    }

    #[test]
    fn test_broken_reference_excluded_only_by_dependent_filters() {
        let catalog = catalog_with_broken_reference();
        let mystery = |items: &[EnrichedProduct]| items.iter().any(|p| p.name() == "Mystery Cola");

        assert!(mystery(&ProductFilter::default().apply(catalog.products())));
        assert!(mystery(
            &ProductFilter::default().search("cola").apply(catalog.products())
        ));

        for user in UserFilter::all().into_iter().filter(|u| !u.is_all()) {
            let result = ProductFilter::default().select_user(user).apply(catalog.products());
            assert!(!mystery(&result), "user {:?}", user);
        }
        for category in CategoryFilter::all() {
            let result = ProductFilter::default()
                .select_category(Some(category))
                .apply(catalog.products());
            assert!(!mystery(&result), "category {:?}", category);
        }
    }

    #[test]
    fn test_apply_does_not_mutate_source() {
        let catalog = catalog();
        let before = catalog.clone();
        let _ = ProductFilter::default().search("milk").apply(catalog.products());
        assert_eq!(catalog, before);
    }
}
