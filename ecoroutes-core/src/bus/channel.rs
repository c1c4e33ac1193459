use std::collections::VecDeque;

/// handle returned by a subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Callback<T> = Box<dyn FnMut(&T)>;

/// synchronous multicast channel without history: a subscriber only sees
/// messages published after it subscribed.
pub struct Channel<T> {
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: usize,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Channel<T> {
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// returns false if no such subscription exists
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// calls every subscriber in subscription order before returning
    pub fn publish(&mut self, message: &T) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(message);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// multicast channel that replays its history to new subscribers. with a
/// capacity the oldest messages are evicted first; without one every message
/// is kept for the lifetime of the channel.
pub struct ReplayChannel<T> {
    channel: Channel<T>,
    history: VecDeque<T>,
    capacity: Option<usize>,
}

impl<T> ReplayChannel<T> {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            channel: Channel::default(),
            history: VecDeque::new(),
            capacity,
        }
    }

    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        for message in self.history.iter() {
            callback(message);
        }
        self.channel.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.channel.unsubscribe(id)
    }

    pub fn publish(&mut self, message: T) {
        self.channel.publish(&message);
        if self.capacity == Some(0) {
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.history.len() >= capacity {
                self.history.pop_front();
            }
        }
        self.history.push_back(message);
    }

    pub fn history(&self) -> impl Iterator<Item = &T> {
        self.history.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl FnMut(&u32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |m: &u32| sink.borrow_mut().push(*m))
    }

    #[test]
    fn test_channel_has_no_history() {
        let mut channel: Channel<u32> = Channel::default();
        channel.publish(&1);
        let (seen, callback) = recorder();
        channel.subscribe(callback);
        channel.publish(&2);
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut channel: Channel<u32> = Channel::default();
        let (seen, callback) = recorder();
        let id = channel.subscribe(callback);
        channel.publish(&1);
        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        channel.publish(&2);
        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn test_replay_delivers_history_then_live() {
        let mut channel: ReplayChannel<u32> = ReplayChannel::new(None);
        channel.publish(1);
        channel.publish(2);
        let (seen, callback) = recorder();
        channel.subscribe(callback);
        channel.publish(3);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_bounded_replay_evicts_oldest() {
        let mut channel: ReplayChannel<u32> = ReplayChannel::new(Some(2));
        for m in 1..=4 {
            channel.publish(m);
        }
        let (seen, callback) = recorder();
        channel.subscribe(callback);
        assert_eq!(*seen.borrow(), vec![3, 4]);
        assert_eq!(channel.history().count(), 2);
    }
}
