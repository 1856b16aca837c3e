pub mod zh_cn;

pub use zh_cn as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub fn fill_two(
    template: &str,
    first: impl std::fmt::Display,
    second: impl std::fmt::Display,
) -> String {
    let first_pass = template.replacen("{}", &first.to_string(), 1);
    first_pass.replacen("{}", &second.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_fill_in_order() {
        assert_eq!(fill_one(current::pagination::ARIA_GOTO_PAGE_TEMPLATE, 3), "跳转到第 3 页");
        assert_eq!(
            fill_two(current::search::RESULT_TEMPLATE, 2, "rust"),
            "找到 2 篇与“rust”相关的文章"
        );
    }
}
