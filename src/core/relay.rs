//! Typed, fire-and-forget event streams between components.
//!
//! A [`Relay`] is the sending half of an unbounded channel; whoever created
//! it with [`relay`] owns the receiving stream and drains it. Relays are
//! named after the event source: `file_opened_relay`, not `open_file`.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Request to open a file in the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenFile {
    pub path: String,
}

/// Sending half of an event stream. Clones feed the same stream.
pub struct Relay<T> {
    sender: UnboundedSender<T>,
}

impl<T> Clone for Relay<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> Relay<T> {
    /// Queue `event` for the stream. Once the stream is gone the event is
    /// dropped; nobody listening is not an error.
    pub fn send(&self, event: T) {
        let _ = self.sender.unbounded_send(event);
    }
}

/// Create a relay together with the stream it feeds.
///
/// The stream ends once every clone of the relay is dropped.
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>) {
    let (sender, receiver) = mpsc::unbounded();
    (Relay { sender }, receiver)
}
