/// Утилиты для списков: поле поиска и подсветка совпадений
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Разбивает текст на фрагменты `(фрагмент, совпадение)` по запросу
/// (без учёта регистра). Запрос сравнивается после trim + lowercase.
///
/// Если позиции в нижнем регистре не совпадают с исходным текстом
/// (не-ASCII символы меняют длину), возвращается текст целиком.
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let needle = filter.trim().to_lowercase();
    let haystack = text.to_lowercase();

    if needle.is_empty() || haystack.len() != text.len() || !haystack.contains(&needle) {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();

        let (Some(before), Some(matched)) = (text.get(last_pos..start), text.get(start..end))
        else {
            return vec![(text.to_string(), false)];
        };

        if !before.is_empty() {
            parts.push((before.to_string(), false));
        }
        parts.push((matched.to_string(), true));
        last_pos = end;
    }

    match text.get(last_pos..) {
        Some(rest) if !rest.is_empty() => parts.push((rest.to_string(), false)),
        Some(_) => {}
        None => return vec![(text.to_string(), false)],
    }

    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = split_matches(text, filter)
        .into_iter()
        .map(|(fragment, is_match)| {
            if is_match {
                view! { <mark class="search-match">{fragment}</mark> }.into_any()
            } else {
                view! { <span>{fragment}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки
///
/// Значение передаётся наружу на каждый ввод, без задержки: список
/// пересчитывается синхронно.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Callback для кнопки очистки
    #[prop(into)]
    on_clear: Callback<()>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon search-input__icon--left">{icon("search")}</span>
            <input
                data-cy="SearchField"
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <span class="search-input__icon search-input__icon--right">
                <Show when=move || !value.get().is_empty()>
                    <button
                        data-cy="ClearButton"
                        type="button"
                        class="search-input__clear"
                        title="Clear"
                        on:click=move |_| on_clear.run(())
                    >
                        {icon("x")}
                    </button>
                </Show>
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(parts: &[(String, bool)]) -> Vec<&str> {
        parts
            .iter()
            .filter(|(_, m)| *m)
            .map(|(s, _)| s.as_str())
            .collect()
    }

    #[test]
    fn test_split_matches_keeps_original_case() {
        let parts = split_matches("Coca-Cola", " COLA ");
        assert_eq!(
            parts,
            vec![
                ("Coca-".to_string(), false),
                ("Cola".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_split_matches_multiple_occurrences() {
        let parts = split_matches("banana", "an");
        assert_eq!(matched(&parts), vec!["an", "an"]);
        let joined: String = parts.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, "banana");
    }

    #[test]
    fn test_split_matches_without_query_or_match() {
        assert_eq!(split_matches("Milk", ""), vec![("Milk".to_string(), false)]);
        assert_eq!(split_matches("Milk", "   "), vec![("Milk".to_string(), false)]);
        assert_eq!(split_matches("Milk", "beer"), vec![("Milk".to_string(), false)]);
    }

    #[test]
    fn test_split_matches_non_ascii_is_safe() {
        // 'İ' меняет длину при переводе в нижний регистр
        let parts = split_matches("İstanbul", "stan");
        assert_eq!(parts, vec![("İstanbul".to_string(), false)]);

        let parts = split_matches("Молоко", "лок");
        assert_eq!(matched(&parts), vec!["лок"]);
    }
}
