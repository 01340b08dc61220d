use std::sync::RwLock;

type Handler<T> = Box<dyn Fn(T) + Send + Sync>;

/// A single-value broadcast channel.
///
/// Delivery is synchronous, in registration order, on the thread that calls
/// [`emit`](Self::emit). There is no buffering: a subscriber registered
/// after an emit does not observe it, and emitting with no subscribers is a
/// no-op. Handlers must not subscribe to the channel they are being
/// delivered on.
pub struct SessionChannel<T: Copy> {
    subscribers: RwLock<Vec<Handler<T>>>,
}

impl<T: Copy> SessionChannel<T> {
    /// Registers `handler` for all subsequent emissions.
    pub fn subscribe(&self, handler: impl Fn(T) + Send + Sync + 'static) {
        self.subscribers
            .write()
            .expect("RwLock is not poisoned")
            .push(Box::new(handler));
    }

    /// Delivers `value` to every current subscriber.
    pub fn emit(&self, value: T) {
        let subscribers = self.subscribers.read().expect("RwLock is not poisoned");
        for handler in subscribers.iter() {
            handler(value);
        }
    }
}

impl<T: Copy> Default for SessionChannel<T> {
    fn default() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Copy> std::fmt::Debug for SessionChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionChannel")
            .field(
                "subscribers",
                &self.subscribers.read().expect("RwLock is not poisoned").len(),
            )
            .finish()
    }
}

/// The two independent broadcast channels decoupling the token store from
/// its observers. Intended to be shared as an `Arc` and injected into
/// whatever needs to observe session changes.
#[derive(Debug, Default)]
pub struct SessionEventBus {
    /// Emits whenever the logged-in state changes.
    pub login: SessionChannel<bool>,
    /// Emits whenever the admin state changes.
    pub admin: SessionChannel<bool>,
}
