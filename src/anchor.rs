/// Whether a click on `href` is handled in-page (including a bare `#`), so the
/// browser's own navigation must be suppressed.
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Selector for an in-page link, or `None` when there is nowhere to go (`#` alone, or an external href).
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href {
        "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Scroll top that leaves `scroll_offset` px between the viewport top and the target.
pub fn scroll_destination(offset_top: f64, scroll_offset: u32) -> f64 {
    offset_top - f64::from(scroll_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_goes_nowhere() {
        assert_eq!(anchor_selector("#"), None);
    }

    #[test]
    fn fragment_is_its_own_selector() {
        assert_eq!(anchor_selector("#pricing"), Some("#pricing"));
    }

    #[test]
    fn external_links_are_left_alone() {
        assert_eq!(anchor_selector("https://example.com/#faq"), None);
        assert_eq!(anchor_selector(""), None);
        assert!(!is_in_page("https://example.com/#faq"));
        assert!(!is_in_page("/pricing"));
        assert!(!is_in_page(""));
    }

    #[test]
    fn fragments_and_bare_hash_stay_in_page() {
        assert!(is_in_page("#"));
        assert!(is_in_page("#faq"));
    }

    #[test]
    fn destination_keeps_offset_above_target() {
        assert_eq!(scroll_destination(1450.0, 100), 1350.0);
        assert_eq!(scroll_destination(40.0, 100), -60.0);
    }
}
