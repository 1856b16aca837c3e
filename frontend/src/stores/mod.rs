//! Explicitly constructed state containers.
//!
//! A store owns its state; views read snapshots and change state only
//! through the store's actions. Views re-render through [`Observable`]
//! subscriptions (see [`crate::hooks::use_store`]).

pub mod app;
pub mod article;
pub mod policy;

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

pub use app::{AppState, AppStore, CategoryMenuItem};
pub use article::{ArticleState, ArticleStore, Pagination};

use crate::{api::Api, theme::ThemeHost};

/// Callback run after every state change.
pub type Listener = Rc<dyn Fn()>;

type Entries = RefCell<Vec<(u64, Listener)>>;

/// Change listeners of one store.
#[derive(Default)]
pub struct Listeners {
    next_id: Cell<u64>,
    entries: Rc<Entries>,
}

impl Listeners {
    /// Registers `listener` until the returned handle is dropped.
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, listener));
        Subscription {
            id,
            entries: Rc::downgrade(&self.entries),
        }
    }

    /// Runs every listener. Listeners may subscribe or unsubscribe while
    /// being notified; the change applies from the next notification.
    pub fn notify(&self) {
        let snapshot: Vec<Listener> =
            self.entries.borrow().iter().map(|(_, listener)| listener.clone()).collect();
        for listener in snapshot {
            listener();
        }
    }

    /// Drops every listener.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Number of live listeners.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    entries: Weak<Entries>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(entries) = self.entries.upgrade() {
            entries.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// A store views can subscribe to.
pub trait Observable {
    /// Registers `listener` for state changes.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

/// Everything the views need, built once by the root component and passed
/// down through props.
#[derive(Clone)]
pub struct Stores {
    /// Site-wide state.
    pub app: Rc<AppStore>,
    /// Article list/detail state.
    pub articles: Rc<ArticleStore>,
    /// Resource modules for views that talk to the API directly.
    pub api: Api,
}

impl Stores {
    /// Builds both stores over `api`, applying themes through `theme`.
    pub fn new(api: Api, theme: Rc<dyn ThemeHost>) -> Self {
        Self {
            app: Rc::new(AppStore::new(&api, theme)),
            articles: Rc::new(ArticleStore::new(api.articles.clone())),
            api,
        }
    }

    /// Stores wired to the browser's fetch API, document and storage.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(
            Api::new(crate::http::HttpClient::browser()),
            Rc::new(crate::theme::BrowserThemeHost),
        )
    }

    /// Tears both stores down: article state back to its initial values and
    /// every listener dropped.
    pub fn dispose(&self) {
        self.articles.dispose();
        self.app.dispose();
    }
}

impl PartialEq for Stores {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.app, &other.app) && Rc::ptr_eq(&self.articles, &other.articles)
    }
}
