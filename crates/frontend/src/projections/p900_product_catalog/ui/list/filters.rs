use contracts::enums::category_filter::CategoryFilter;
use contracts::enums::user_filter::UserFilter;
use leptos::prelude::*;

/// Вкладки выбора владельца: активна ровно одна
#[component]
pub fn UserFilterTabs(
    #[prop(into)] selected: Signal<UserFilter>,
    on_select: Callback<UserFilter>,
) -> impl IntoView {
    view! {
        <p class="filter-tabs">
            {UserFilter::all()
                .into_iter()
                .map(move |user| {
                    view! {
                        <a
                            data-cy="FilterUser"
                            href="#/"
                            class=move || {
                                if selected.get() == user {
                                    "filter-tabs__link is-active"
                                } else {
                                    "filter-tabs__link"
                                }
                            }
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_select.run(user);
                            }
                        >
                            {user.display_name()}
                        </a>
                    }
                })
                .collect_view()}
        </p>
    }
}

/// Кнопки категорий плюс «All», сбрасывающая выбор
#[component]
pub fn CategoryFilterButtons(
    #[prop(into)] selected: Signal<Option<CategoryFilter>>,
    on_select: Callback<Option<CategoryFilter>>,
) -> impl IntoView {
    view! {
        <div class="filter-categories">
            <a
                data-cy="AllCategories"
                href="#/"
                class=move || {
                    if selected.get().is_none() {
                        "button button--success button--outlined is-success"
                    } else {
                        "button button--success button--outlined"
                    }
                }
                on:click=move |ev| {
                    ev.prevent_default();
                    on_select.run(None);
                }
            >
                "All"
            </a>
            {CategoryFilter::all()
                .into_iter()
                .map(move |category| {
                    view! {
                        <a
                            data-cy="Category"
                            href="#/"
                            class=move || {
                                if selected.get() == Some(category) {
                                    "button button--info is-info"
                                } else {
                                    "button"
                                }
                            }
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_select.run(Some(category));
                            }
                        >
                            {category.title()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
