use serde::{Deserialize, Serialize};

/// Фильтр по владельцу категории товара
///
/// `All` означает «не фильтровать».
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserFilter {
    #[default]
    All,
    Roma,
    Anna,
    Max,
    John,
}

impl UserFilter {
    /// Получить человекочитаемое название (совпадает с `User::name`)
    pub fn display_name(&self) -> &'static str {
        match self {
            UserFilter::All => "All",
            UserFilter::Roma => "Roma",
            UserFilter::Anna => "Anna",
            UserFilter::Max => "Max",
            UserFilter::John => "John",
        }
    }

    /// Имя пользователя для сравнения; `None` для `All`
    pub fn user_name(&self) -> Option<&'static str> {
        match self {
            UserFilter::All => None,
            other => Some(other.display_name()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, UserFilter::All)
    }

    /// Получить все значения в порядке отображения
    pub fn all() -> Vec<UserFilter> {
        vec![
            UserFilter::All,
            UserFilter::Roma,
            UserFilter::Anna,
            UserFilter::Max,
            UserFilter::John,
        ]
    }

    /// Парсинг из строки
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.display_name() == name)
    }
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_tabs() {
        let names: Vec<_> = UserFilter::all().iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["All", "Roma", "Anna", "Max", "John"]);
    }

    #[test]
    fn test_all_is_sentinel() {
        assert!(UserFilter::default().is_all());
        assert_eq!(UserFilter::All.user_name(), None);
        assert_eq!(UserFilter::Max.user_name(), Some("Max"));
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(UserFilter::from_name("Anna"), Some(UserFilter::Anna));
        assert_eq!(UserFilter::from_name("anna"), None);
        assert_eq!(UserFilter::from_name("Nobody"), None);
    }
}
