//! Change notification
//!
//! Subscribers are plain callbacks invoked synchronously on the writing
//! call stack, in subscription order, after the store file has been
//! replaced on disk. There is no queue and no isolation: a panicking
//! subscriber unwinds out of the write, which is already durable by then.

use std::fmt;

use serde::Serialize;

use crate::scope::Scope;
use crate::types::{OptionId, SettingValue};

/// A settings change as delivered to subscribers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeEvent {
    /// The option that changed
    pub identifier: OptionId,
    /// The value written, or `None` when an entry was removed
    pub value: Option<SettingValue>,
    /// Scope of a per-site write; `None` for global writes
    pub scope: Option<Scope>,
}

/// Handle identifying one subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&ChangeEvent) + Send>;

pub(crate) struct ChangeNotifier {
    subscribers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub(crate) fn new() -> Self {
        ChangeNotifier {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn subscribe(
        &mut self,
        handler: impl FnMut(&ChangeEvent) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Returns whether the subscription existed
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscriber, _)| *subscriber != id);
        self.subscribers.len() != before
    }

    pub(crate) fn notify(&mut self, event: &ChangeEvent) {
        for (_, handler) in &mut self.subscribers {
            handler(event);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
