use std::cell::RefCell;
use std::rc::Rc;

use rankings::CountryRecord;

#[derive(Debug, Default)]
struct Shared {
    selected: Option<CountryRecord>,
    revision: u64,
}

/// Shared single-selection state for the globe and the side panel.
///
/// Either view may set the selection; both re-render from the one shared
/// value. Handles are cheap clones over the same cell; all mutation happens
/// on the single UI thread, so no locking is involved. Revisions increase
/// monotonically on every observable change, letting views skip redundant
/// re-renders.
///
/// No validation happens here: a selection whose code has no matching
/// boundary feature is the render engine's problem to tolerate.
#[derive(Debug, Clone, Default)]
pub struct SelectionBridge {
    shared: Rc<RefCell<Shared>>,
}

impl SelectionBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection. Returns `true` (and bumps the revision) when the
    /// value actually changed.
    pub fn select(&self, record: Option<CountryRecord>) -> bool {
        let mut shared = self.shared.borrow_mut();
        if shared.selected == record {
            return false;
        }
        shared.selected = record;
        shared.revision += 1;
        true
    }

    pub fn selected(&self) -> Option<CountryRecord> {
        self.shared.borrow().selected.clone()
    }

    pub fn selected_code(&self) -> Option<String> {
        self.shared
            .borrow()
            .selected
            .as_ref()
            .map(|record| record.iso_code.clone())
    }

    pub fn revision(&self) -> u64 {
        self.shared.borrow().revision
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionBridge;
    use rankings::fallback_rankings;

    #[test]
    fn handles_share_one_value() {
        let globe_side = SelectionBridge::new();
        let panel_side = globe_side.clone();
        let records = fallback_rankings();

        // Panel-driven selection is visible to the globe.
        assert!(panel_side.select(Some(records[2].clone())));
        assert_eq!(globe_side.selected_code().as_deref(), Some("DEU"));

        // Globe-driven selection is visible to the panel.
        assert!(globe_side.select(Some(records[0].clone())));
        assert_eq!(panel_side.selected_code().as_deref(), Some("USA"));
    }

    #[test]
    fn revision_bumps_only_on_change() {
        let bridge = SelectionBridge::new();
        let records = fallback_rankings();
        assert_eq!(bridge.revision(), 0);

        assert!(bridge.select(Some(records[0].clone())));
        assert_eq!(bridge.revision(), 1);

        // Same value again: no observable change.
        assert!(!bridge.select(Some(records[0].clone())));
        assert_eq!(bridge.revision(), 1);

        assert!(bridge.select(None));
        assert_eq!(bridge.revision(), 2);
        assert!(bridge.selected().is_none());
    }
}
