use super::{Channel, ReplayChannel, SubscriptionId};
use crate::record::{DisplayKey, DisplayRoute};

/// broadcasts routes added to or removed from the map between the input
/// components and the renderers.
///
/// the two channels buffer differently: a late subscriber to `added` receives
/// every route added before it subscribed (up to the replay capacity), even
/// routes deleted since, while `removed` delivers only deletions that happen
/// after subscribing.
pub struct RouteBus {
    routes: Vec<DisplayRoute>,
    added: ReplayChannel<DisplayRoute>,
    removed: Channel<DisplayRoute>,
}

impl Default for RouteBus {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RouteBus {
    /// `replay_capacity` bounds the history of the added channel, None keeps all
    pub fn new(replay_capacity: Option<usize>) -> Self {
        Self {
            routes: Vec::new(),
            added: ReplayChannel::new(replay_capacity),
            removed: Channel::default(),
        }
    }

    pub fn add_route(&mut self, route: DisplayRoute) {
        log::debug!("adding route {}", route.key());
        self.routes.push(route.clone());
        self.added.publish(route);
    }

    /// removes the route shown under `key` and notifies subscribers. returns
    /// false, without notifying, when no such route is displayed.
    pub fn delete_route(&mut self, key: &DisplayKey) -> bool {
        let Some(position) = self.routes.iter().position(|r| &r.key() == key) else {
            log::debug!("no displayed route {key} to delete");
            return false;
        };
        let route = self.routes.remove(position);
        log::debug!("deleted route {key}");
        self.removed.publish(&route);
        true
    }

    /// routes currently displayed, in insertion order
    pub fn routes(&self) -> &[DisplayRoute] {
        &self.routes
    }

    pub fn subscribe_added<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&DisplayRoute) + 'static,
    {
        self.added.subscribe(callback)
    }

    pub fn subscribe_removed<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&DisplayRoute) + 'static,
    {
        self.removed.subscribe(callback)
    }

    pub fn unsubscribe_added(&mut self, id: SubscriptionId) -> bool {
        self.added.unsubscribe(id)
    }

    pub fn unsubscribe_removed(&mut self, id: SubscriptionId) -> bool {
        self.removed.unsubscribe(id)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::record::{RouteRecord, TravelMode};
    use std::{cell::RefCell, rc::Rc};

    fn route(id: &str, mode: TravelMode) -> DisplayRoute {
        let record = RouteRecord {
            id: id.to_owned(),
            ..Default::default()
        };
        DisplayRoute::new(&record, mode)
    }

    #[test]
    fn test_late_subscriber_replays_adds_but_not_deletes() {
        let mut bus = RouteBus::default();
        bus.add_route(route("a", TravelMode::Train));
        bus.add_route(route("b", TravelMode::Flight));
        assert!(bus.delete_route(&route("a", TravelMode::Train).key()));

        let added = Rc::new(RefCell::new(Vec::new()));
        let removed = Rc::new(RefCell::new(Vec::new()));
        let added_sink = added.clone();
        let removed_sink = removed.clone();
        bus.subscribe_added(move |r| added_sink.borrow_mut().push(r.key()));
        bus.subscribe_removed(move |r| removed_sink.borrow_mut().push(r.key()));

        assert_eq!(added.borrow().len(), 2);
        assert!(removed.borrow().is_empty());

        bus.delete_route(&route("b", TravelMode::Flight).key());
        assert_eq!(*removed.borrow(), vec![route("b", TravelMode::Flight).key()]);
        assert!(bus.routes().is_empty());
    }

    #[test]
    fn test_delete_matches_id_and_mode() {
        let mut bus = RouteBus::default();
        bus.add_route(route("a", TravelMode::Train));
        bus.add_route(route("a", TravelMode::Flight));
        assert!(!bus.delete_route(&route("a", TravelMode::Average).key()));
        assert!(bus.delete_route(&route("a", TravelMode::Train).key()));
        assert_eq!(bus.routes().len(), 1);
        assert_eq!(bus.routes()[0].mode, TravelMode::Flight);
    }
}
