#[cfg(test)]
mod tests {
    use crate::core::scroll::HEADER_SCROLL_THRESHOLD_PX;
    use crate::core::{
        Disclosure, DisclosurePhase, HeaderStyle, PageContent, RevealDirection, RevealLatch,
        RevealOptions, ScrollTracker,
    };

    fn faq_disclosures(content: &PageContent) -> Vec<Disclosure> {
        content
            .faq
            .entries
            .iter()
            .map(|entry| Disclosure::new(entry.id.clone()))
            .collect()
    }

    #[test]
    fn test_toggling_one_faq_leaves_others_untouched() {
        let content = PageContent::embedded().unwrap();
        let mut items = faq_disclosures(&content);

        for target in 0..items.len() {
            let before: Vec<DisclosurePhase> = items.iter().map(|d| d.phase()).collect();
            items[target].toggle();

            for (index, item) in items.iter().enumerate() {
                if index == target {
                    assert_ne!(item.phase(), before[index]);
                } else {
                    assert_eq!(item.phase(), before[index], "item {index} changed");
                }
            }
        }

        // Every row was opened once and none closed another.
        assert!(items.iter().all(Disclosure::is_open));
    }

    #[test]
    fn test_security_question_opens_and_closes() {
        let content = PageContent::embedded().unwrap();
        let entry = content.faq_entry("Esse site é seguro?").unwrap();
        let mut item = Disclosure::new(entry.id.clone());

        assert!(!item.is_open());
        assert!(item.panel_class().contains("max-h-0"));

        item.toggle();
        assert!(item.is_open());
        assert!(item.panel_class().contains("max-h-96"));

        item.toggle();
        assert!(!item.is_open());
        assert!(item.panel_class().contains("max-h-0"));
    }

    #[test]
    fn test_header_scenario_zero_eighty_zero() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.threshold(), HEADER_SCROLL_THRESHOLD_PX);
        assert_eq!(tracker.style(), HeaderStyle::Default);

        assert_eq!(tracker.update(80.0), Some(HeaderStyle::Scrolled));
        assert_eq!(tracker.update(0.0), Some(HeaderStyle::Default));
    }

    #[test]
    fn test_header_style_is_pure_in_offset() {
        let offsets = [0.0, 12.0, 49.9, 50.0, 50.1, 80.0, 640.0, 3200.0];
        let mut tracker = ScrollTracker::new();

        // Sweep forwards then backwards; the style must only track the offset.
        for offset in offsets.iter().chain(offsets.iter().rev()) {
            tracker.update(*offset);
            assert_eq!(
                tracker.style(),
                HeaderStyle::for_offset(*offset, HEADER_SCROLL_THRESHOLD_PX)
            );
        }
    }

    #[test]
    fn test_reveals_are_independent_of_sibling_order() {
        let mut first = RevealLatch::new(RevealOptions::new(0.0, RevealDirection::Up));
        let mut second = RevealLatch::new(RevealOptions::new(0.2, RevealDirection::Up));

        // The second element reaches the viewport first.
        assert!(second.observe(true).is_triggered());
        assert!(!first.is_revealed());

        assert!(!first.observe(false).is_triggered());
        assert!(first.observe(true).is_triggered());
        assert!(first.is_revealed() && second.is_revealed());
    }
}
