use crate::projections::p900_product_catalog::ui::list::ProductCatalogList;
use crate::shared::config::AppConfig;
use contracts::projections::p900_product_catalog::ProductCatalog;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Справочники соединяются один раз при старте; дальше только фильтрация
    match ProductCatalog::load() {
        Ok(catalog) => view! {
            <ProductCatalogList catalog=catalog config=config />
        }
        .into_any(),
        Err(e) => {
            log::error!("Failed to load product catalog: {:#}", e);
            view! {
                <div class="alert alert--error">
                    {format!("Failed to load product catalog: {}", e)}
                </div>
            }
            .into_any()
        }
    }
}
