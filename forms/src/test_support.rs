//! Scripted transport for submitter tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::error::FormError;
use crate::transport::{FormResponse, FormTransport};

type Reply = Result<FormResponse, FormError>;

#[derive(Clone, Debug)]
enum Mode {
    Respond(u16),
    Fail,
    Defer,
}

#[derive(Debug)]
struct Inner {
    mode: Mode,
    requests: Vec<(String, String)>,
    pending: HashMap<usize, oneshot::Sender<Reply>>,
}

/// Records every request and answers according to its mode.
#[derive(Clone, Debug)]
pub struct ScriptedTransport {
    inner: Rc<RefCell<Inner>>,
}

impl ScriptedTransport {
    fn with_mode(mode: Mode) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                mode,
                requests: Vec::new(),
                pending: HashMap::new(),
            })),
        }
    }

    /// Every request completes immediately with `status`.
    pub fn responding(status: u16) -> Self {
        Self::with_mode(Mode::Respond(status))
    }

    /// Every request fails without a response.
    pub fn failing() -> Self {
        Self::with_mode(Mode::Fail)
    }

    /// Requests stay in flight until [`Self::resolve`] is called.
    pub fn deferred() -> Self {
        Self::with_mode(Mode::Defer)
    }

    /// `(endpoint, body)` of every request, in issue order.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.inner.borrow().requests.clone()
    }

    /// Complete the `index`-th issued request with `status`.
    pub fn resolve(&self, index: usize, status: u16) {
        let sender = self.inner.borrow_mut().pending.remove(&index).expect("request is pending");
        sender.send(Ok(FormResponse::new(status, "ok"))).expect("submitter is waiting");
    }
}

impl FormTransport for ScriptedTransport {
    fn post_form(&self, endpoint: &str, body: String) -> impl Future<Output = Reply> {
        let mut inner = self.inner.borrow_mut();
        let index = inner.requests.len();
        inner.requests.push((endpoint.to_owned(), body));

        let mode = inner.mode.clone();
        let receiver = if matches!(mode, Mode::Defer) {
            let (sender, receiver) = oneshot::channel();
            inner.pending.insert(index, sender);
            Some(receiver)
        } else {
            None
        };

        async move {
            match (mode, receiver) {
                (_, Some(receiver)) => receiver
                    .await
                    .unwrap_or_else(|_| Err(FormError::Network("reply dropped".to_owned()))),
                (Mode::Respond(status), None) => Ok(FormResponse::new(status, format!("status {status}"))),
                _ => Err(FormError::Network("connection refused".to_owned())),
            }
        }
    }
}
