//! Terminal-side `HostPage` implementation.

use gamefeed_engine::HostPage;

/// Host that collects card fragments for export.
///
/// The terminal has no sidebar or form controls, so the panel methods are
/// no-ops; the loading indicator maps to the caller's progress display.
#[derive(Debug, Default)]
pub struct ExportHost {
    fragments: Vec<String>,
    exhausted_notice: Option<String>,
}

impl ExportHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards collected so far.
    pub fn card_count(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the feed signaled end of data.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted_notice.is_some()
    }

    /// Join all collected fragments into one document body.
    pub fn to_document(&self) -> String {
        let mut doc = String::new();
        doc.push_str("<div class=\"games-container\">\n");
        for fragment in &self.fragments {
            doc.push_str(fragment);
            doc.push('\n');
        }
        doc.push_str("</div>\n");
        if let Some(notice) = &self.exhausted_notice {
            doc.push_str(notice);
            doc.push('\n');
        }
        doc
    }
}

impl HostPage for ExportHost {
    fn append_card(&mut self, html: &str) {
        self.fragments.push(html.to_string());
    }

    fn clear_cards(&mut self) {
        self.fragments.clear();
        self.exhausted_notice = None;
    }

    fn set_loading_visible(&mut self, _visible: bool) {}

    fn show_exhausted_notice(&mut self, html: &str) {
        self.exhausted_notice = Some(html.to_string());
    }

    fn close_filter_panel(&mut self) {}

    fn reset_filter_controls(&mut self) {}
}
