pub mod category_filter;
pub mod user_filter;
