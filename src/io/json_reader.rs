use std::cell::Cell;
use std::fmt;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use serde::Deserializer as _;
use serde::de::{self, SeqAccess, Visitor};
use tokio::io::AsyncRead;
use tokio::sync::mpsc;
use tokio_util::io::SyncIoBridge;
use tracing::debug;

use super::error::ParseError;
use super::parse::RawDeliveryRecord;
use crate::domain::DeliveryRecord;

/// One pulled element of the delivery stream
pub type DeliveryItem = Result<DeliveryRecord, ParseError>;

/// The producer may run at most one item ahead of the consumer
const HANDOFF_CAPACITY: usize = 1;

/// Async stream of validated delivery records decoded from a JSON array.
///
/// Decoding happens on a blocking task, one array element at a time, and
/// each result is handed over a bounded channel. Dropping the stream closes
/// the channel; the producer notices on its next send, stops decoding and
/// drops its reader.
///
/// Must be created from within a tokio runtime.
pub struct JsonDeliveryStream {
    receiver: mpsc::Receiver<DeliveryItem>,
}

impl JsonDeliveryStream {
    /// Stream records from a file.
    ///
    /// The file is opened on the producer task; if that fails the stream
    /// yields a single [`ParseError::SourceOpen`] and ends.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::spawn(move |tx| {
            let file = match std::fs::File::open(&path) {
                Ok(file) => file,
                Err(source) => {
                    let _ = tx.blocking_send(Err(ParseError::SourceOpen { path, source }));
                    return;
                }
            };
            debug!(path = %path.display(), "Opened delivery source");
            decode_array(BufReader::new(file), &tx);
        })
    }

    /// Stream records from a blocking reader
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::spawn(move |tx| decode_array(BufReader::new(reader), &tx))
    }

    /// Stream records from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        Self::from_reader(SyncIoBridge::new(reader))
    }

    fn spawn<F>(produce: F) -> Self
    where
        F: FnOnce(mpsc::Sender<DeliveryItem>) + Send + 'static,
    {
        let (tx, receiver) = mpsc::channel(HANDOFF_CAPACITY);
        tokio::task::spawn_blocking(move || produce(tx));
        Self { receiver }
    }
}

impl Stream for JsonDeliveryStream {
    type Item = DeliveryItem;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

fn decode_array<R: Read>(reader: R, tx: &mpsc::Sender<DeliveryItem>) {
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let position = Cell::new(None);

    let outcome = deserializer
        .deserialize_seq(RecordArrayVisitor {
            tx,
            position: &position,
        })
        .and_then(|count| deserializer.end().map(|()| count));

    match outcome {
        Ok(count) => debug!(records = count, "Finished decoding delivery array"),
        Err(_) if tx.is_closed() => debug!("Delivery stream dropped by consumer, stopping"),
        Err(source) => {
            // Syntax errors cannot be resynchronised, so a failure inside the
            // array is reported against the element being read and ends the stream.
            let error = match position.get() {
                Some(index) => ParseError::Decode { index, source },
                None => ParseError::Structure(source),
            };
            let _ = tx.blocking_send(Err(error));
        }
    }
}

/// Visits the top-level array, sending one item per element.
///
/// `position` holds the index of the element being read while inside the
/// array and `None` outside it.
struct RecordArrayVisitor<'a> {
    tx: &'a mpsc::Sender<DeliveryItem>,
    position: &'a Cell<Option<usize>>,
}

impl<'de> Visitor<'de> for RecordArrayVisitor<'_> {
    type Value = usize;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON array of delivery records")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut index = 0;
        loop {
            self.position.set(Some(index));
            let Some(value) = seq.next_element::<serde_json::Value>()? else {
                break;
            };

            let item = RawDeliveryRecord::decode(value, index);
            if self.tx.blocking_send(item).is_err() {
                return Err(de::Error::custom("delivery stream closed"));
            }
            index += 1;
        }
        self.position.set(None);
        Ok(index)
    }
}
