//! Статические справочники, встроенные в бинарник на этапе сборки.
//!
//! Корректность JSON дополнительно проверяется в `build.rs`.

use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_category::aggregate::Category;
use crate::domain::a003_product::aggregate::Product;
use anyhow::Context;

const USERS_JSON: &str = include_str!("../../../data/users.json");
const CATEGORIES_JSON: &str = include_str!("../../../data/categories.json");
const PRODUCTS_JSON: &str = include_str!("../../../data/products.json");

/// Исходные коллекции в порядке из файлов
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Разобрать встроенные справочники
pub fn load_seed() -> anyhow::Result<SeedData> {
    parse_seed(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON)
}

/// Разобрать справочники из произвольных JSON-строк
pub fn parse_seed(
    users_json: &str,
    categories_json: &str,
    products_json: &str,
) -> anyhow::Result<SeedData> {
    let users: Vec<User> =
        serde_json::from_str(users_json).context("Failed to parse users.json")?;
    let categories: Vec<Category> =
        serde_json::from_str(categories_json).context("Failed to parse categories.json")?;
    let products: Vec<Product> =
        serde_json::from_str(products_json).context("Failed to parse products.json")?;

    Ok(SeedData {
        users,
        categories,
        products,
    })
}
