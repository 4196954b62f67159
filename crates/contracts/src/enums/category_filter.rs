use serde::{Deserialize, Serialize};

/// Фильтр по категории товара
///
/// «Все категории» выражается через `Option::None` на стороне состояния.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    Grocery,
    Drinks,
    Fruits,
    Electronics,
    Clothes,
}

impl CategoryFilter {
    /// Заголовок категории (совпадает с `Category::title`)
    pub fn title(&self) -> &'static str {
        match self {
            CategoryFilter::Grocery => "Grocery",
            CategoryFilter::Drinks => "Drinks",
            CategoryFilter::Fruits => "Fruits",
            CategoryFilter::Electronics => "Electronics",
            CategoryFilter::Clothes => "Clothes",
        }
    }

    pub fn all() -> Vec<CategoryFilter> {
        vec![
            CategoryFilter::Grocery,
            CategoryFilter::Drinks,
            CategoryFilter::Fruits,
            CategoryFilter::Electronics,
            CategoryFilter::Clothes,
        ]
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.title() == title)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let titles: Vec<_> = CategoryFilter::all().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Grocery", "Drinks", "Fruits", "Electronics", "Clothes"]);
    }

    #[test]
    fn test_from_title() {
        assert_eq!(CategoryFilter::from_title("Drinks"), Some(CategoryFilter::Drinks));
        assert_eq!(CategoryFilter::from_title("drinks"), None);
        assert_eq!(CategoryFilter::from_title(""), None);
    }
}
