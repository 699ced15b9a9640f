//! Recording doubles for the fetch manager and media cache.

#![allow(dead_code)]

use courier_core::{
    FetchKey, FetchResourceSourceType, FileAttribute, ImageRepresentation, MediaFile,
    MediaFileBuilder, MediaImage, MediaResource, MediaResourceId, MediaResourceStatus, MessageId,
    MessageReference, PeerId, PixelDimensions,
};
use courier_error::{FetchError, FetchErrorKind};
use courier_interface::{
    FetchManager, FetchSignal, InteractiveFetchRequest, MediaBox, ResourceFetchRequest,
    ResourceSignal, StatusSignal,
};
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// How the doubles answer fetch requests.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Emit `n` progress items, then complete
    Succeed(usize),
    /// Emit `n` progress items, then fail
    FailAfter(usize, FetchErrorKind),
    /// Never emit, never complete
    Hang,
}

/// Fetch manager that records every call.
pub struct RecordingFetchManager {
    behavior: MockBehavior,
    started: Mutex<Vec<InteractiveFetchRequest>>,
    active: Mutex<HashSet<FetchKey>>,
    cancelled: Mutex<Vec<FetchKey>>,
    paused: Mutex<HashMap<String, bool>>,
    status_queries: Mutex<Vec<FetchKey>>,
}

impl RecordingFetchManager {
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            started: Mutex::new(Vec::new()),
            active: Mutex::new(HashSet::new()),
            cancelled: Mutex::new(Vec::new()),
            paused: Mutex::new(HashMap::new()),
            status_queries: Mutex::new(Vec::new()),
        })
    }

    pub fn started(&self) -> Vec<InteractiveFetchRequest> {
        self.started.lock().unwrap().clone()
    }

    pub fn cancelled(&self) -> Vec<FetchKey> {
        self.cancelled.lock().unwrap().clone()
    }

    pub fn is_active(&self, key: &FetchKey) -> bool {
        self.active.lock().unwrap().contains(key)
    }

    pub fn is_paused(&self, resource_id: &str) -> bool {
        self.paused
            .lock()
            .unwrap()
            .get(resource_id)
            .copied()
            .unwrap_or(false)
    }

    pub fn status_queries(&self) -> Vec<FetchKey> {
        self.status_queries.lock().unwrap().clone()
    }
}

impl FetchManager for RecordingFetchManager {
    fn interactively_fetched(&self, request: InteractiveFetchRequest) -> FetchSignal {
        self.active.lock().unwrap().insert(request.key().clone());
        self.started.lock().unwrap().push(request);
        match &self.behavior {
            MockBehavior::Succeed(n) => stream::iter((0..*n).map(|_| Ok(()))).boxed(),
            MockBehavior::FailAfter(n, kind) => {
                let error = FetchError::new(kind.clone());
                stream::iter((0..*n).map(|_| Ok(())))
                    .chain(stream::once(async move { Err(error) }))
                    // Anything after the error must never reach subscribers.
                    .chain(stream::iter(vec![Ok(()), Ok(())]))
                    .boxed()
            }
            MockBehavior::Hang => stream::pending().boxed(),
        }
    }

    fn cancel_interactive_fetches(&self, key: &FetchKey) {
        self.active.lock().unwrap().remove(key);
        self.cancelled.lock().unwrap().push(key.clone());
    }

    fn toggle_interactive_fetch_paused(&self, resource_id: &MediaResourceId, is_paused: bool) {
        self.paused
            .lock()
            .unwrap()
            .insert(resource_id.string_representation().to_string(), is_paused);
    }

    fn fetch_status(&self, key: &FetchKey) -> StatusSignal {
        self.status_queries.lock().unwrap().push(key.clone());
        let status = if self.is_paused(key.resource_id.string_representation()) {
            MediaResourceStatus::Paused { progress: 0.5 }
        } else if self.is_active(key) {
            MediaResourceStatus::Fetching {
                is_active: true,
                progress: 0.5,
            }
        } else {
            MediaResourceStatus::Remote { progress: 0.0 }
        };
        stream::iter(vec![status]).boxed()
    }
}

/// Media cache that records every call.
pub struct RecordingMediaBox {
    behavior: MockBehavior,
    requests: Mutex<Vec<ResourceFetchRequest>>,
    cancelled: Mutex<Vec<MediaResourceId>>,
}

impl RecordingMediaBox {
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            requests: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ResourceFetchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn cancelled(&self) -> Vec<MediaResourceId> {
        self.cancelled.lock().unwrap().clone()
    }
}

impl MediaBox for RecordingMediaBox {
    fn fetched_media_resource(&self, request: ResourceFetchRequest) -> ResourceSignal {
        self.requests.lock().unwrap().push(request);
        let remote = FetchResourceSourceType::Remote {
            total_size: Some(4096),
        };
        match &self.behavior {
            MockBehavior::Succeed(n) => stream::iter((0..*n).map(move |_| Ok(remote))).boxed(),
            MockBehavior::FailAfter(n, kind) => {
                let error = FetchError::new(kind.clone());
                stream::iter((0..*n).map(move |_| Ok(remote)))
                    .chain(stream::once(async move { Err(error) }))
                    .boxed()
            }
            MockBehavior::Hang => stream::pending().boxed(),
        }
    }

    fn cancel_interactive_resource_fetch(&self, resource_id: &MediaResourceId) {
        self.cancelled.lock().unwrap().push(resource_id.clone());
    }
}

pub fn message_id() -> MessageId {
    MessageId::new(PeerId(42), 0, 1001)
}

pub fn message_reference() -> MessageReference {
    MessageReference::new(message_id(), 1_700_000_000)
}

pub fn file_with(id: &str, attributes: Vec<FileAttribute>) -> MediaFile {
    MediaFileBuilder::default()
        .resource(MediaResource::new(id, Some(8192)))
        .mime_type("application/octet-stream")
        .attributes(attributes)
        .build()
        .expect("Valid file")
}

pub fn plain_file(id: &str) -> MediaFile {
    file_with(id, Vec::new())
}

pub fn voice_file(id: &str) -> MediaFile {
    file_with(
        id,
        vec![FileAttribute::Audio {
            is_voice: true,
            duration: 4,
            title: None,
            performer: None,
        }],
    )
}

pub fn representation(width: i32, height: i32, id: &str) -> ImageRepresentation {
    ImageRepresentation {
        dimensions: PixelDimensions::new(width, height),
        resource: MediaResource::new(id, None),
    }
}

pub fn photo(representations: Vec<ImageRepresentation>) -> MediaImage {
    MediaImage::new(9, representations)
}
