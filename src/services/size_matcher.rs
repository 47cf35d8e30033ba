//! Keep copy buttons (and inline logos) the same size as their promo box
//!
//! Each `.promo-row` holds a `.promo-box`, a `.copy-btn` and optionally a
//! `.logo-inline` image. On wide viewports the button takes the box's rendered
//! size and the logo takes the button's. On small viewports forced sizes are
//! cleared so the stylesheet's full-width rules apply.

use crate::config::PromoConfig;
use crate::dom::{Page, PageElement};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub matched: usize,
    pub cleared: usize,
    /// Rows missing a promo box or a copy button
    pub skipped: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowResult {
    Matched,
    Cleared,
    Skipped,
}

/// One sizing pass over every promo row on the page
pub fn match_sizes<P: Page>(page: &P, config: &PromoConfig) -> MatchReport {
    let small_screen = config.is_small_screen(page.viewport_width());
    let mut report = MatchReport::default();

    for row in page.select_all(&config.promo_row_selector()) {
        match match_row(page, &row, small_screen, config) {
            RowResult::Matched => report.matched += 1,
            RowResult::Cleared => report.cleared += 1,
            RowResult::Skipped => report.skipped += 1,
        }
    }

    log::debug!(
        "Size pass: {} matched, {} cleared, {} skipped",
        report.matched,
        report.cleared,
        report.skipped
    );
    report
}

fn match_row<P: Page>(page: &P, row: &P::Element, small_screen: bool, config: &PromoConfig) -> RowResult {
    let (promo, button) = match (
        row.find(&config.promo_box_selector()),
        row.find(&config.copy_button_selector()),
    ) {
        (Some(promo), Some(button)) => (promo, button),
        _ => return RowResult::Skipped,
    };
    let logo = row.find(&config.logo_inline_selector());

    if small_screen {
        clear_size(&button);
        if let Some(logo) = &logo {
            clear_size(logo);
        }
        return RowResult::Cleared;
    }

    apply_size(&button, &promo);

    if let Some(logo) = &logo {
        // Measured after the button update so the logo follows the new size
        apply_size(logo, &button);
        logo.set_style("object-fit", "cover");
        logo.set_style("border-radius", &corner_radius(page, &button, config));
    }

    RowResult::Matched
}

fn apply_size<E: PageElement>(target: &E, reference: &E) {
    let (width, height) = reference.rendered_size().rounded_px();
    target.set_style("width", &width);
    target.set_style("height", &height);
}

fn clear_size<E: PageElement>(target: &E) {
    target.clear_style("width");
    target.clear_style("height");
}

/// Button's computed radius, then the page's radius variable, then the default
fn corner_radius<P: Page>(page: &P, button: &P::Element, config: &PromoConfig) -> String {
    button
        .computed_style("border-radius")
        .or_else(|| page.root_property(&config.radius_var))
        .unwrap_or_else(|| config.default_radius.clone())
}
