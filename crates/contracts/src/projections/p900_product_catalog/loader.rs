use super::dto::EnrichedProduct;
use super::seed::load_seed;
use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_category::aggregate::Category;
use crate::domain::a003_product::aggregate::Product;

/// Соединение справочников: товару назначается первая категория с его
/// `categoryId`, категории первый пользователь с её `ownerId`.
///
/// Порядок товаров сохраняется. Оборванные ссылки дают `None`.
pub fn enrich_products(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Vec<EnrichedProduct> {
    products
        .iter()
        .map(|product| {
            let category = categories
                .iter()
                .find(|c| c.id == product.category_id)
                .cloned();

            let user = category
                .as_ref()
                .and_then(|c| users.iter().find(|u| u.id == c.owner_id))
                .cloned();

            EnrichedProduct {
                product: product.clone(),
                category,
                user,
            }
        })
        .collect()
}

/// Каталог товаров, собранный один раз при старте приложения
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<EnrichedProduct>,
}

impl ProductCatalog {
    /// Загрузить встроенные справочники и выполнить соединение
    pub fn load() -> anyhow::Result<Self> {
        let seed = load_seed()?;
        let catalog = Self::from_parts(&seed.products, &seed.categories, &seed.users);
        log::info!(
            "Product catalog loaded: {} products, {} categories, {} users",
            catalog.len(),
            seed.categories.len(),
            seed.users.len()
        );
        Ok(catalog)
    }

    pub fn from_parts(products: &[Product], categories: &[Category], users: &[User]) -> Self {
        let products = enrich_products(products, categories, users);

        for item in &products {
            match &item.category {
                None => log::warn!(
                    "Product {} '{}': category {} not found",
                    item.product.id.value(),
                    item.product.name,
                    item.product.category_id.value()
                ),
                Some(category) if item.user.is_none() => log::warn!(
                    "Product {} '{}': owner {} of category '{}' not found",
                    item.product.id.value(),
                    item.product.name,
                    category.owner_id.value(),
                    category.title
                ),
                Some(_) => {}
            }
        }

        Self { products }
    }

    /// Полный список в исходном порядке
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
