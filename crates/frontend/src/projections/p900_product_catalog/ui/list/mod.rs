pub mod filters;
pub mod state;

use self::filters::{CategoryFilterButtons, UserFilterTabs};
use self::state::{create_state, transition};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_user::aggregate::Sex;
use contracts::domain::common::AggregateId;
use contracts::enums::category_filter::CategoryFilter;
use contracts::enums::user_filter::UserFilter;
use contracts::projections::p900_product_catalog::{EnrichedProduct, ProductCatalog, ProductFilter};
use leptos::prelude::*;
use thaw::*;

const COLUMNS: [&str; 4] = ["ID", "Product", "Category", "User"];

/// Сортировка по колонкам не реализована: иконка выводится без обработчика
const SORT_NOT_IMPLEMENTED: &str = "Sorting is not implemented";

fn user_cell_class(item: &EnrichedProduct) -> &'static str {
    match item.user.as_ref().map(|u| u.sex) {
        Some(Sex::Male) => "product-user product-user--male has-text-link",
        Some(Sex::Female) => "product-user product-user--female has-text-danger",
        None => "product-user",
    }
}

#[component]
pub fn ProductCatalogList(catalog: ProductCatalog, config: AppConfig) -> impl IntoView {
    let state = create_state();
    let total_count = catalog.len();
    let catalog = StoredValue::new(catalog);

    let filtered = Memo::new(move |_| {
        state.with(|filter| catalog.with_value(|c| filter.apply(c.products())))
    });

    let search_text = Signal::derive(move || state.with(|f| f.search_text.clone()));
    let selected_user = Signal::derive(move || state.with(|f| f.selected_user));
    let selected_category = Signal::derive(move || state.with(|f| f.selected_category));
    let active_filters_count = Signal::derive(move || state.with(|f| f.active_count()));

    let highlight = config.ui.highlight_matches;
    let empty_message = config.ui.empty_message.clone();

    view! {
        <div class="section">
            <div class="container">
                <div class="page__header">
                    <div class="page__header-left">
                        {icon("products")}
                        <h1 class="page__title">{config.ui.title.clone()}</h1>
                        <span class="badge badge--primary">
                            {move || format!("{} / {}", filtered.with(|items| items.len()), total_count)}
                        </span>
                    </div>
                </div>

                <nav class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = active_filters_count.get();
                                if count > 0 {
                                    view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <UserFilterTabs
                            selected=selected_user
                            on_select=Callback::new(move |user: UserFilter| {
                                transition(state, |f| f.select_user(user))
                            })
                        />

                        <SearchInput
                            value=search_text
                            on_change=Callback::new(move |text: String| {
                                transition(state, |f| f.search(text))
                            })
                            on_clear=Callback::new(move |_: ()| transition(state, ProductFilter::clear_search))
                            placeholder="Search"
                        />

                        <CategoryFilterButtons
                            selected=selected_category
                            on_select=Callback::new(move |category: Option<CategoryFilter>| {
                                transition(state, |f| f.select_category(category))
                            })
                        />

                        <div class="filter-panel__actions">
                            <Button
                                attr:data-cy="ResetAllButton"
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| transition(state, ProductFilter::reset_all)
                            >
                                {icon("refresh")}
                                "Reset all filters"
                            </Button>
                        </div>
                    </div>
                </nav>

                <div class="table-wrapper">
                    <Show
                        when=move || filtered.with(|items| !items.is_empty())
                        fallback=move || view! {
                            <p data-cy="NoMatchingMessage" class="empty-state">
                                {empty_message.clone()}
                            </p>
                        }
                    >
                        <Table attr:data-cy="ProductTable" attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    {COLUMNS
                                        .iter()
                                        .map(|column| view! {
                                            <TableHeaderCell resizable=false min_width=80.0>
                                                <span class="table__header-label">
                                                    {*column}
                                                    <span
                                                        data-cy="SortIcon"
                                                        class="table__sort-icon table__sort-icon--inert"
                                                        title=SORT_NOT_IMPLEMENTED
                                                    >
                                                        {icon("sort")}
                                                    </span>
                                                </span>
                                            </TableHeaderCell>
                                        })
                                        .collect_view()}
                                </TableRow>
                            </TableHeader>

                            <TableBody>
                                <For
                                    each=move || filtered.get()
                                    key=|item| item.product.id
                                    children=move |item| {
                                        let name = item.product.name.clone();
                                        let category_label = item
                                            .category
                                            .as_ref()
                                            .map(|c| c.label())
                                            .unwrap_or_else(|| "—".to_string());
                                        let user_name = item
                                            .user_name()
                                            .map(str::to_string)
                                            .unwrap_or_else(|| "—".to_string());
                                        let user_class = user_cell_class(&item);

                                        view! {
                                            <TableRow attr:data-cy="Product">
                                                <TableCell attr:data-cy="ProductId">
                                                    <TableCellLayout>
                                                        <b>{item.product.id.as_string()}</b>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell attr:data-cy="ProductName">
                                                    <TableCellLayout truncate=true>
                                                        {move || {
                                                            if highlight {
                                                                highlight_matches(&name, &search_text.get())
                                                            } else {
                                                                view! { <span>{name.clone()}</span> }.into_any()
                                                            }
                                                        }}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell attr:data-cy="ProductCategory">
                                                    <TableCellLayout truncate=true>
                                                        {category_label}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell attr:data-cy="ProductUser">
                                                    <TableCellLayout truncate=true>
                                                        <span class=user_class>{user_name}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::aggregate::User;
    use contracts::domain::a002_category::aggregate::Category;
    use contracts::domain::a003_product::aggregate::Product;

    fn enriched(user: Option<User>) -> EnrichedProduct {
        EnrichedProduct {
            product: Product::new(1, "Milk", 1),
            category: Some(Category::new(1, "Grocery", "🍞", 2)),
            user,
        }
    }

    #[test]
    fn test_user_cell_class_follows_sex() {
        assert!(user_cell_class(&enriched(Some(User::new(2, "Anna", Sex::Female))))
            .contains("has-text-danger"));
        assert!(user_cell_class(&enriched(Some(User::new(1, "Roma", Sex::Male))))
            .contains("has-text-link"));
        assert_eq!(user_cell_class(&enriched(None)), "product-user");
    }
}
