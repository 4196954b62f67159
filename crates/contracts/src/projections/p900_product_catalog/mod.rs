//! P900: каталог товаров: справочники, соединённые в плоский список,
//! и фильтрация этого списка.

pub mod dto;
pub mod filter;
pub mod loader;
pub mod seed;

pub use dto::EnrichedProduct;
pub use filter::ProductFilter;
pub use loader::{enrich_products, ProductCatalog};
