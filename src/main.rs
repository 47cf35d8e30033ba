#[cfg(target_arch = "wasm32")]
use promobox::{config::PromoConfig, hooks};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        log::info!("Starting promo page script");

        if let Err(e) = hooks::install(PromoConfig::default()) {
            log::error!("Failed to install page behaviors: {}", e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("promobox runs in the browser; build it for wasm32-unknown-unknown");
}

/// Re-run the size pass after promo rows were added or changed
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = refreshPromoSizes)]
pub fn refresh_promo_sizes() {
    match hooks::refresh_sizes() {
        Some(report) => log::debug!("Manual size pass matched {} rows", report.matched),
        None => log::warn!("Size refresh requested before install"),
    }
}

/// Detach all listeners, e.g. before swapping the page content out
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = removePromoBehaviors)]
pub fn remove_promo_behaviors() {
    hooks::uninstall();
}
