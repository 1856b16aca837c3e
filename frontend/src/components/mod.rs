// Reusable components live here.

pub mod article_card;
pub mod error_banner;
pub mod header;
pub mod loading_spinner;
pub mod pagination;
pub mod raw_html;
pub mod theme_toggle;
