//! Page hooks and tuning values
//!
//! Every class name, attribute and timing the script relies on lives here so the
//! markup contract can be read in one place.

/// Viewports at or below this width (CSS pixels) fall back to the responsive
/// stylesheet instead of forced sizes
pub const SMALL_SCREEN_MAX_WIDTH: f64 = 420.0;

/// Quiet period after the last `resize` event before sizes are recomputed
pub const RESIZE_DEBOUNCE_MS: u32 = 120;

pub const COPIED_MESSAGE: &str = "Copied ✓";
pub const COPIED_DURATION_MS: u32 = 1800;

pub const FAILED_MESSAGE: &str = "Copy failed";
pub const FAILED_DURATION_MS: u32 = 1400;

/// Label restored on copy buttons once feedback expires
pub const DEFAULT_BUTTON_LABEL: &str = "COPY";

pub const COPY_BUTTON_CLASS: &str = "copy-btn";
pub const PROMO_BOX_CLASS: &str = "promo-box";
pub const PROMO_ROW_CLASS: &str = "promo-row";
pub const LOGO_INLINE_CLASS: &str = "logo-inline";
pub const COPIED_CLASS: &str = "copied";
pub const CODE_ATTRIBUTE: &str = "data-code";

/// Custom property consulted when the button has no computed radius
pub const PROMO_RADIUS_VAR: &str = "--promo-radius";
pub const DEFAULT_PROMO_RADIUS: &str = "10px";

/// Timed label shown on a copy button
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub duration_ms: u32,
}

impl Feedback {
    pub fn new(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            message: message.into(),
            duration_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PromoConfig {
    pub copy_button_class: String,
    pub promo_box_class: String,
    pub promo_row_class: String,
    pub logo_inline_class: String,
    pub copied_class: String,
    pub code_attribute: String,
    pub success: Feedback,
    pub failure: Feedback,
    /// Label to restore after feedback; `None` restores whatever the button
    /// showed before feedback started
    pub revert_label: Option<String>,
    pub small_screen_max_width: f64,
    pub resize_debounce_ms: u32,
    pub radius_var: String,
    pub default_radius: String,
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            copy_button_class: COPY_BUTTON_CLASS.to_string(),
            promo_box_class: PROMO_BOX_CLASS.to_string(),
            promo_row_class: PROMO_ROW_CLASS.to_string(),
            logo_inline_class: LOGO_INLINE_CLASS.to_string(),
            copied_class: COPIED_CLASS.to_string(),
            code_attribute: CODE_ATTRIBUTE.to_string(),
            success: Feedback::new(COPIED_MESSAGE, COPIED_DURATION_MS),
            failure: Feedback::new(FAILED_MESSAGE, FAILED_DURATION_MS),
            revert_label: Some(DEFAULT_BUTTON_LABEL.to_string()),
            small_screen_max_width: SMALL_SCREEN_MAX_WIDTH,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            radius_var: PROMO_RADIUS_VAR.to_string(),
            default_radius: DEFAULT_PROMO_RADIUS.to_string(),
        }
    }
}

impl PromoConfig {
    pub fn copy_button_selector(&self) -> String {
        format!(".{}", self.copy_button_class)
    }

    pub fn promo_box_selector(&self) -> String {
        format!(".{}", self.promo_box_class)
    }

    pub fn promo_row_selector(&self) -> String {
        format!(".{}", self.promo_row_class)
    }

    pub fn logo_inline_selector(&self) -> String {
        format!(".{}", self.logo_inline_class)
    }

    pub fn is_small_screen(&self, viewport_width: f64) -> bool {
        viewport_width <= self.small_screen_max_width
    }
}
