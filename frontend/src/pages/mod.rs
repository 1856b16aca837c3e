pub mod about;
pub mod article_detail;
pub mod article_list;
pub mod home;
pub mod not_found;
pub mod search;
pub mod taxonomy;
