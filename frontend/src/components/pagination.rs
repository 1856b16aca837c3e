use yew::prelude::*;

use crate::{
    i18n::{current::pagination as t, fill_one, fill_two},
    stores::Pagination,
};

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    pub on_page_change: Callback<u32>,
}

#[derive(Debug, PartialEq, Eq)]
enum PageSlot {
    Page(u32),
    Ellipsis(&'static str),
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let Pagination {
        total,
        page,
        total_pages,
        ..
    } = props.pagination;
    if total_pages <= 1 {
        return Html::default();
    }

    let current_page = page.clamp(1, total_pages);
    let slots = visible_slots(current_page, total_pages);
    let on_page_change = props.on_page_change.clone();

    let go_to = |target: u32| {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(target))
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.75rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "text-sm",
        "font-semibold",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="flex flex-wrap items-center gap-3" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={current_page <= 1}
                onclick={go_to(current_page.saturating_sub(1).max(1))}
                aria-label={t::ARIA_PREV}
            >
                {"<"}
            </button>
            { for slots.into_iter().map(|slot| match slot {
                PageSlot::Page(target) => {
                    let is_current = target == current_page;
                    let page_classes = classes!(
                        base_btn_classes.clone(),
                        is_current.then_some("bg-[var(--primary)] text-white border-transparent")
                    );
                    html! {
                        <button
                            key={format!("page-{target}")}
                            type="button"
                            class={page_classes}
                            aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, target)}
                            aria-current={is_current.then_some(AttrValue::from("page"))}
                            disabled={is_current}
                            onclick={go_to(target)}
                        >
                            { target }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span
                        key={format!("ellipsis-{id}")}
                        class={classes!(base_btn_classes.clone(), "opacity-60", "pointer-events-none")}
                        aria-hidden="true"
                    >
                        {"..."}
                    </span>
                },
            }) }
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={current_page >= total_pages}
                onclick={go_to((current_page + 1).min(total_pages))}
                aria-label={t::ARIA_NEXT}
            >
                {">"}
            </button>
            <span class="text-sm text-[var(--muted)]">
                { fill_two(t::SUMMARY_TEMPLATE, total, current_page) }
            </span>
        </nav>
    }
}

/// First, last and up to five pages around `current`, with ellipses over gaps.
fn visible_slots(current: u32, total: u32) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total.saturating_sub(4).max(2), total - 1)
    } else {
        (current - 2, current + 2)
    };

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }
    slots.push(PageSlot::Page(total));
    slots
}
