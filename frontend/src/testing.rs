//! In-memory stand-ins for the network and the document, used by unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeSet, HashMap, VecDeque},
    rc::Rc,
};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use crate::{
    config::ClientConfig,
    http::{ApiError, HttpClient, Method, RawResponse, Transport, TransportRequest},
    theme::{Theme, ThemeHost},
};

type Reply = Result<RawResponse, ApiError>;

/// Scripted transport keyed by `(method, path)`; the `/api` prefix and the
/// query string are ignored when matching.
#[derive(Default)]
pub(crate) struct MockTransport {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    gates: RefCell<HashMap<(Method, String), oneshot::Receiver<()>>>,
    sent: RefCell<Vec<TransportRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn client(self: &Rc<Self>) -> HttpClient {
        HttpClient::new(
            self.clone(),
            ClientConfig {
                base_url: "/api".to_string(),
                ..ClientConfig::default()
            },
        )
    }

    /// Queues a reply. The last queued reply for a route is repeated.
    pub(crate) fn push(&self, method: Method, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub(crate) fn reply_text(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(
            method,
            path,
            Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub(crate) fn reply_json(&self, method: Method, path: &str, status: u16, body: Value) {
        self.reply_text(method, path, status, &body.to_string());
    }

    /// Replies 200 with `data` wrapped in a success envelope.
    pub(crate) fn reply_data(&self, method: Method, path: &str, data: Value) {
        self.reply_json(method, path, 200, json!({"code": 0, "message": "success", "data": data}));
    }

    pub(crate) fn fail(&self, method: Method, path: &str, err: ApiError) {
        self.push(method, path, Err(err));
    }

    /// Holds the next request to `path` until the returned sender fires.
    pub(crate) fn hold(&self, method: Method, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert((method, path.to_string()), rx);
        tx
    }

    pub(crate) fn sent(&self) -> Vec<TransportRequest> {
        self.sent.borrow().clone()
    }

    /// URLs of every request sent so far, in order.
    pub(crate) fn sent_urls(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| r.url.clone()).collect()
    }

    fn next_reply(&self, key: &(Method, String)) -> Reply {
        let mut replies = self.replies.borrow_mut();
        match replies.get_mut(key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(|| unreachable_reply(key)),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| unreachable_reply(key)),
            None => unreachable_reply(key),
        }
    }
}

fn unreachable_reply(key: &(Method, String)) -> Reply {
    Err(ApiError::Network(format!("no mock reply for {} {}", key.0, key.1)))
}

fn route_path(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or(url);
    without_query.strip_prefix("/api").unwrap_or(without_query).to_string()
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, ApiError> {
        let key = (request.method, route_path(&request.url));
        self.sent.borrow_mut().push(request);

        let gate = self.gates.borrow_mut().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.next_reply(&key)
    }
}

/// Document + storage double recording what the theme code did.
pub(crate) struct MemoryThemeHost {
    pub(crate) stored: RefCell<Option<Theme>>,
    pub(crate) prefers_dark: Cell<bool>,
    pub(crate) data_theme: RefCell<Option<String>>,
    pub(crate) body_classes: RefCell<BTreeSet<String>>,
    pub(crate) writes: RefCell<Vec<Theme>>,
}

impl MemoryThemeHost {
    pub(crate) fn new(stored: Option<Theme>, prefers_dark: bool) -> Rc<Self> {
        Rc::new(Self {
            stored: RefCell::new(stored),
            prefers_dark: Cell::new(prefers_dark),
            data_theme: RefCell::new(None),
            body_classes: RefCell::new(BTreeSet::new()),
            writes: RefCell::new(Vec::new()),
        })
    }

    /// `data-theme` attribute and body classes, for before/after comparisons.
    pub(crate) fn dom_snapshot(&self) -> (Option<String>, BTreeSet<String>) {
        (self.data_theme.borrow().clone(), self.body_classes.borrow().clone())
    }
}

impl ThemeHost for MemoryThemeHost {
    fn stored(&self) -> Option<Theme> {
        *self.stored.borrow()
    }

    fn store(&self, theme: Theme) {
        *self.stored.borrow_mut() = Some(theme);
        self.writes.borrow_mut().push(theme);
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn apply(&self, theme: Theme) {
        *self.data_theme.borrow_mut() = Some(theme.as_str().to_string());
        let mut classes = self.body_classes.borrow_mut();
        classes.remove(theme.toggled().body_class());
        classes.insert(theme.body_class().to_string());
    }
}
