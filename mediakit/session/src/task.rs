/*!
    Asynchronous open.
*/

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use mediakit_types::{Error, MediaOptions, Result};

use crate::backend::DecoderBackend;
use crate::session::MediaSession;

/**
    A pending asynchronous open.

    Produced by [`MediaSession::open_async`]; [`wait`](OpenTask::wait)
    delivers the same value-or-error outcome the synchronous open would
    have produced for the same input.
*/
pub struct OpenTask {
    handle: JoinHandle<Result<MediaSession>>,
}

impl OpenTask {
    /**
        Block until the open completes and return its outcome.
    */
    pub fn wait(self) -> Result<MediaSession> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(Error::open_failed("open task panicked")),
        }
    }

    /**
        Returns true if the open has completed and `wait` will not block.
    */
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl MediaSession {
    /**
        Open the media file at `path` without blocking the calling thread.

        A scheduling convenience only: the synchronous
        [`open`](MediaSession::open) runs on a spawned thread with the same
        contract; no extra locking or state is involved.
    */
    pub fn open_async<B>(backend: B, path: impl Into<PathBuf>, options: MediaOptions) -> OpenTask
    where
        B: DecoderBackend + Send + 'static,
    {
        let path = path.into();
        let handle = thread::spawn(move || MediaSession::open(&backend, &path, options));
        OpenTask { handle }
    }
}

impl std::fmt::Debug for OpenTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenTask")
            .field("finished", &self.is_finished())
            .finish_non_exhaustive()
    }
}
