use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Throws (caught) when the Lucide script is not on the page.
    #[wasm_bindgen(catch, js_namespace = lucide, js_name = createIcons)]
    fn lucide_create_icons() -> Result<(), JsValue>;
}

pub(super) fn init_icons() {
    if lucide_create_icons().is_err() {
        super::dom::warn("icons: lucide.createIcons unavailable");
    }
}
