use contracts::projections::p900_product_catalog::ProductFilter;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ProductFilter> {
    RwSignal::new(ProductFilter::default())
}

/// Применить переход к состоянию фильтров одним обновлением сигнала
pub fn transition(state: RwSignal<ProductFilter>, step: impl FnOnce(ProductFilter) -> ProductFilter) {
    state.update(|current| {
        let next = step(std::mem::take(current));
        log::debug!(
            "Filter changed: query={:?}, user={}, category={}",
            next.search_text,
            next.selected_user,
            next.selected_category
                .map(|c| c.title())
                .unwrap_or("All")
        );
        *current = next;
    });
}
