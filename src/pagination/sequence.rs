//! Compressed page-number strip with ellipsis gaps.

use serde::Serialize;

pub const DEFAULT_MAX_BUTTONS: usize = 10;
/// Smallest strip that still fits two anchors, two gaps and the current page.
pub const MIN_MAX_BUTTONS: usize = 5;
pub const ELLIPSIS: &str = "...";

/// A single clickable button of the page strip.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageButton {
    /// Page number as text, or [`ELLIPSIS`] for a gap.
    pub label: String,
    pub is_current: bool,
    /// Page requested when the button is clicked. For a gap this is the page
    /// right next to the visible window.
    pub page_number: usize,
    /// Position of the button in the strip.
    pub index: usize,
}

impl PageButton {
    pub fn is_gap(&self) -> bool {
        self.label == ELLIPSIS
    }
}

fn push_page(buttons: &mut Vec<PageButton>, page_number: usize, current: usize) {
    buttons.push(PageButton {
        label: page_number.to_string(),
        is_current: page_number == current,
        page_number,
        index: buttons.len(),
    });
}

fn push_gap(buttons: &mut Vec<PageButton>, page_number: usize) {
    buttons.push(PageButton {
        label: ELLIPSIS.to_string(),
        is_current: false,
        page_number,
        index: buttons.len(),
    });
}

/// Places the window of interior pages around `current`, keeping it inside
/// `2..=total_pages - 1`.
fn core_window(
    current: usize,
    total_pages: usize,
    max: usize,
    left_gap: bool,
    right_gap: bool,
) -> (usize, usize) {
    let core_slots = max - 2 - usize::from(left_gap) - usize::from(right_gap);
    let half = core_slots / 2;

    // Signed: the window may slide past the anchors before it is clamped.
    let last_inner = total_pages as isize - 1;
    let mut left = current as isize - half as isize;
    let mut right = current as isize + (core_slots - 1 - half) as isize;

    if left < 2 {
        right += 2 - left;
        left = 2;
    }
    if right > last_inner {
        left -= right - last_inner;
        right = last_inner;
    }

    (left.max(2) as usize, right.min(last_inner) as usize)
}

/// Builds the page strip for `current_page` out of `total_pages`.
///
/// The first and last page are always present, as is the current page. When
/// there are more pages than `max_buttons`, the pages around the current one
/// are shown and the rest collapse into at most one gap per side. The strip
/// never exceeds `max_buttons` entries (clamped to at least
/// [`MIN_MAX_BUTTONS`]).
pub fn get_pages(current_page: usize, total_pages: usize, max_buttons: usize) -> Vec<PageButton> {
    if total_pages <= 1 {
        let mut buttons = Vec::with_capacity(1);
        push_page(&mut buttons, 1, 1);
        return buttons;
    }

    let max = max_buttons.max(MIN_MAX_BUTTONS);
    let current = current_page.clamp(1, total_pages);
    let mut buttons = Vec::with_capacity(max.min(total_pages));

    if total_pages <= max {
        for page in 1..=total_pages {
            push_page(&mut buttons, page, current);
        }
        return buttons;
    }

    let mut need_left_gap = current > 4;
    let mut need_right_gap = current + 3 < total_pages;

    // A gap that shows up without having been budgeted for would push the
    // strip past `max`, so budget it and lay the window out again.
    let (left, right) = loop {
        let (left, right) = core_window(current, total_pages, max, need_left_gap, need_right_gap);
        let left_gap = left > 2;
        let right_gap = right + 1 < total_pages;

        if (left_gap && !need_left_gap) || (right_gap && !need_right_gap) {
            need_left_gap |= left_gap;
            need_right_gap |= right_gap;
            continue;
        }

        break (left, right);
    };

    push_page(&mut buttons, 1, current);

    if left > 2 {
        push_gap(&mut buttons, left - 1);
    } else {
        push_page(&mut buttons, 2, current);
    }

    for page in left.max(3)..=right.min(total_pages - 2) {
        push_page(&mut buttons, page, current);
    }

    if right == total_pages - 1 {
        push_page(&mut buttons, total_pages - 1, current);
    } else {
        push_gap(&mut buttons, right + 1);
    }

    push_page(&mut buttons, total_pages, current);

    buttons
}
