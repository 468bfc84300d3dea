use bazari_engine::{ListingView, ViewConfig};
use bazari_types::{Listing, OwnerProfile};

/// Identity of one in-flight owner fetch: the id being fetched and the
/// view generation it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    owner_id: String,
    generation: u64,
}

impl FetchTicket {
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

/// One open detail view plus the staleness guard for its owner fetch.
///
/// The guard is request identity, not arrival order: a ticket issued
/// before the listing changed no longer applies, so a slow response for
/// the previous listing can never overwrite a newer resolution. Each
/// session owns its own state; nothing is shared across views.
#[derive(Debug, Clone)]
pub struct ViewSession {
    view: ListingView,
    generation: u64,
}

impl ViewSession {
    pub fn new(listing: Listing, config: ViewConfig) -> Self {
        Self {
            view: ListingView::new(listing, config),
            generation: 0,
        }
    }

    pub fn view(&self) -> &ListingView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ListingView {
        &mut self.view
    }

    /// Start an owner fetch. `None` when the listing names no owner, in
    /// which case the view simply renders owner-less.
    pub fn begin_owner_fetch(&self) -> Option<FetchTicket> {
        self.view.owner_id().map(|id| FetchTicket {
            owner_id: id.to_string(),
            generation: self.generation,
        })
    }

    /// Apply a completed fetch. A stale ticket is discarded; the return
    /// value says whether the result was applied.
    pub fn complete_owner_fetch(
        &mut self,
        ticket: &FetchTicket,
        owner: Option<OwnerProfile>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.view.set_owner(owner);
        true
    }

    /// Swap in a different listing (navigation within the same host).
    /// Outstanding tickets become stale; filter and carousel reset.
    pub fn replace_listing(&mut self, listing: Listing) {
        let config = self.view.config().clone();
        self.view = ListingView::new(listing, config);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(value: serde_json::Value) -> ViewSession {
        ViewSession::new(
            Listing::from_value(value).unwrap(),
            ViewConfig::default(),
        )
    }

    fn owner(name: &str) -> OwnerProfile {
        serde_json::from_value(json!({"firstName": name})).unwrap()
    }

    #[test]
    fn test_fetch_applies_for_current_generation() {
        let mut s = session(json!({"userId": "u-1", "contactPerson": "Desk"}));
        let ticket = s.begin_owner_fetch().unwrap();
        assert_eq!(ticket.owner_id(), "u-1");

        assert!(s.complete_owner_fetch(&ticket, Some(owner("Sita"))));
        assert_eq!(s.view().contact().display_name, "Sita");
    }

    #[test]
    fn test_stale_ticket_discarded_after_listing_change() {
        let mut s = session(json!({"userId": "u-1"}));
        let stale = s.begin_owner_fetch().unwrap();

        s.replace_listing(Listing::from_value(json!({"userId": "u-2"})).unwrap());
        let fresh = s.begin_owner_fetch().unwrap();
        assert_eq!(fresh.owner_id(), "u-2");

        // Fresh response lands first, stale one afterwards.
        assert!(s.complete_owner_fetch(&fresh, Some(owner("Fresh"))));
        assert!(!s.complete_owner_fetch(&stale, Some(owner("Stale"))));
        assert_eq!(s.view().contact().display_name, "Fresh");
    }

    #[test]
    fn test_no_owner_id_means_no_ticket() {
        let s = session(json!({"title": "Orphan listing"}));
        assert!(s.begin_owner_fetch().is_none());
    }

    #[test]
    fn test_completing_with_none_clears_owner() {
        let mut s = session(json!({"userId": "u-1", "contactPerson": "Desk"}));
        let ticket = s.begin_owner_fetch().unwrap();
        assert!(s.complete_owner_fetch(&ticket, Some(owner("Sita"))));

        let again = s.begin_owner_fetch().unwrap();
        assert!(s.complete_owner_fetch(&again, None));
        assert_eq!(s.view().contact().display_name, "Desk");
    }

    #[test]
    fn test_replace_listing_resets_view_state() {
        let mut s = session(json!({"images": ["a.jpg", "b.jpg"]}));
        s.view_mut().gallery.next();
        s.view_mut().filter.show_all = true;

        s.replace_listing(Listing::from_value(json!({"images": ["c.jpg"]})).unwrap());
        assert_eq!(s.view().gallery.index(), 0);
        assert_eq!(s.view().gallery.images(), ["c.jpg"]);
        assert!(!s.view().filter.show_all);
    }
}
