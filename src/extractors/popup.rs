/// Class/id fragments commonly carried by fake-antivirus modals and
/// scare-popup overlays. jBox and sweet-alert are third-party widget
/// libraries that scam kits ship verbatim.
const POPUP_FRAGMENTS: [&str; 8] = [
    "modal",
    "popup",
    "alert",
    "warning",
    "error",
    "welcome",
    "jBox",
    "sweet-alert",
];

pub struct PopupDetector;

impl PopupDetector {
    /// Presence flag over the class/id attribute values collected by the
    /// DOM collaborator. Occurrence counts are deliberately not tracked.
    pub fn has_popups(element_attrs: &[String]) -> bool {
        element_attrs.iter().any(|attr| {
            POPUP_FRAGMENTS
                .iter()
                .any(|fragment| attr.contains(fragment))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detects_modal_classes() {
        assert!(PopupDetector::has_popups(&attrs(&["scam-modal-overlay"])));
        assert!(PopupDetector::has_popups(&attrs(&["nav", "warning-box"])));
        assert!(PopupDetector::has_popups(&attrs(&["sweet-alert"])));
        assert!(PopupDetector::has_popups(&attrs(&["jBox-container"])));
    }

    #[test]
    fn test_clean_page() {
        assert!(!PopupDetector::has_popups(&attrs(&["header", "content", "footer"])));
        assert!(!PopupDetector::has_popups(&[]));
    }
}
