// Display-mode preference: saved choice wins, system preference is the
// fallback. Consumers get the current value as a prop from App instead of
// reading shared mutable state.

use web_sys::window;

const STORAGE_KEY: &str = "darkMode";

pub fn initial_dark() -> bool {
    let window = match window() {
        Some(window) => window,
        None => return true,
    };

    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(saved)) = storage.get_item(STORAGE_KEY) {
            if let Ok(saved) = saved.parse::<bool>() {
                return saved;
            }
        }
    }

    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn persist_dark(dark: bool) {
    let window = match window() {
        Some(window) => window,
        None => return,
    };

    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, if dark { "true" } else { "false" });
    }

    if let Some(root) = window.document().and_then(|doc| doc.document_element()) {
        let class_list = root.class_list();
        let _ = if dark {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
    }
}
