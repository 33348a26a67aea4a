use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::JoinHandle;

use crate::nodes::{NodeRecord, NodeSource};

/// One-shot background node fetch.
///
/// The fetch runs on its own thread so startup never blocks the tick
/// loop: the scene renders immediately with zero markers and markers
/// appear once the fetch resolves. A failed fetch is logged and resolves
/// to an empty record list; it is never fatal.
pub struct NodeLoader {
    receiver: Receiver<Vec<NodeRecord>>,
    handle: Option<JoinHandle<()>>,
}

impl NodeLoader {
    /// Spawn the fetch thread against the given source.
    #[must_use]
    pub fn spawn<S>(source: S) -> Self
    where
        S: NodeSource + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let handle = std::thread::spawn(move || {
            let records = match source.fetch_nodes() {
                Ok(records) => records,
                Err(e) => {
                    log::error!("node fetch failed: {e}");
                    Vec::new()
                }
            };
            // Receiver may already be gone if the viewer was dropped
            let _ = sender.send(records);
        });
        Self {
            receiver,
            handle: Some(handle),
        }
    }

    /// Non-blocking poll for the fetch result.
    ///
    /// Returns `Some(records)` exactly once, when the fetch has resolved.
    /// Returns `None` while the fetch is still in flight and forever
    /// after the result has been taken.
    pub fn poll(&mut self) -> Option<Vec<NodeRecord>> {
        match self.receiver.try_recv() {
            Ok(records) => {
                if let Some(handle) = self.handle.take() {
                    let _ = handle.join();
                }
                Some(records)
            }
            Err(TryRecvError::Empty) => None,
            // Sender dropped without a result (fetch thread died):
            // resolve to zero markers rather than staying in flight
            Err(TryRecvError::Disconnected) => {
                self.handle.take().map(|handle| {
                    let _ = handle.join();
                    Vec::new()
                })
            }
        }
    }
}
