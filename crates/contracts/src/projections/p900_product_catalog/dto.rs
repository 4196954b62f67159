use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_category::aggregate::Category;
use crate::domain::a003_product::aggregate::Product;
use serde::{Deserialize, Serialize};

/// Товар с разрешёнными ссылками на категорию и владельца категории (P900)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,

    /// `None`, если категория по `categoryId` не найдена
    pub category: Option<Category>,

    /// `None`, если нет категории или владелец по `ownerId` не найден
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.title.as_str())
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
