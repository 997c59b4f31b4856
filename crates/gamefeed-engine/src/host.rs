//! The engine's view of the host page.

/// Everything the controller needs from the page it renders into.
///
/// The card container is append-only between filter changes; the engine
/// never replaces cards it already appended. Hosts without a loading
/// element or filter panel implement those methods as no-ops (the
/// browser host only guards the loading indicator; a missing container
/// or form control is an integration fault, not a runtime case).
pub trait HostPage {
    /// Append one rendered card fragment to the games container.
    fn append_card(&mut self, html: &str);

    /// Empty the games container (filter change).
    fn clear_cards(&mut self);

    /// Show or hide the loading indicator.
    fn set_loading_visible(&mut self, visible: bool);

    /// Display the terminal "all loaded" notice in the loading element.
    fn show_exhausted_notice(&mut self, html: &str);

    /// Close the filter panel (sidebar and overlay).
    fn close_filter_panel(&mut self);

    /// Reset the search input and sort select to their defaults.
    fn reset_filter_controls(&mut self);
}
