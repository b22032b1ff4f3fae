//! Photo slot sequencing bindings.
//!
//! Compressions cannot be cancelled. When a manager re-picks the departure
//! photo before the first one finished compressing, the dashboard asks for a
//! ticket before each call and drops any result whose ticket is no longer
//! current.
//!
//! ```typescript
//! const slots = new JsPhotoSlots();
//! const ticket = slots.begin('departure');
//! const photo = await worker.compress(file);
//! if (slots.is_current('departure', ticket)) {
//!   departurePhoto = photo;
//! }
//! ```

use busmeter_core::{PhotoSlot, SlotTracker};
use wasm_bindgen::prelude::*;

/// Per-slot ticket counter for the three photo inputs.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsPhotoSlots {
    tracker: SlotTracker,
}

#[wasm_bindgen]
impl JsPhotoSlots {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsPhotoSlots {
        JsPhotoSlots::default()
    }

    /// Start a request for `slot` ("departure", "return" or "fuel") and get
    /// its ticket number.
    pub fn begin(&self, slot: &str) -> Result<f64, JsValue> {
        let slot = parse_slot(slot)?;
        Ok(self.tracker.begin(slot).seq() as f64)
    }

    /// Whether `ticket` is still the latest request for `slot`.
    pub fn is_current(&self, slot: &str, ticket: f64) -> Result<bool, JsValue> {
        let slot = parse_slot(slot)?;
        Ok(ticket >= 1.0 && self.tracker.latest(slot) == ticket as u64)
    }
}

fn parse_slot(name: &str) -> Result<PhotoSlot, JsValue> {
    PhotoSlot::from_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown photo slot: {}", name)))
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_stale_ticket_is_not_current() {
        let slots = JsPhotoSlots::new();
        let first = slots.begin("departure").unwrap();
        let second = slots.begin("departure").unwrap();

        assert!(!slots.is_current("departure", first).unwrap());
        assert!(slots.is_current("departure", second).unwrap());
    }

    #[wasm_bindgen_test]
    fn test_slots_are_independent() {
        let slots = JsPhotoSlots::new();
        let fuel = slots.begin("fuel").unwrap();
        slots.begin("return").unwrap();

        assert!(slots.is_current("fuel", fuel).unwrap());
    }

    #[wasm_bindgen_test]
    fn test_unknown_slot_errors() {
        let slots = JsPhotoSlots::new();
        assert!(slots.begin("trunk").is_err());
        assert!(slots.is_current("trunk", 1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_zero_ticket_never_current() {
        let slots = JsPhotoSlots::new();
        assert!(!slots.is_current("fuel", 0.0).unwrap());
    }
}
