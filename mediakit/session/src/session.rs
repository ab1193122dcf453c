/*!
    Media session lifecycle.
*/

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use mediakit_types::{Error, MediaOptions, Result};

use crate::backend::{ContainerHandle, DecoderBackend};
use crate::video::VideoSession;

/**
    An open media file: the exclusive owner of a container handle and, when
    the container has a decodable video stream, of one [`VideoSession`].

    A session is created only through [`open`](MediaSession::open) or
    [`open_async`](MediaSession::open_async) and torn down exactly once,
    either by an explicit [`close`](MediaSession::close) or on drop. Close
    releases the stream decoder before the container (the decoder may hold
    references into the container) and is idempotent; a closed session is
    permanently dead and cannot be reopened.

    One session may be shared across threads only under caller-supplied
    exclusion; all mutating operations take `&mut self`.
*/
pub struct MediaSession {
    container: Box<dyn ContainerHandle>,
    video: Option<VideoSession>,
    closed: AtomicBool,
}

impl MediaSession {
    /**
        Open the media file at `path` with the given decoder settings.

        Missing-file and missing-directory conditions from the backend pass
        through unchanged as [`Error::FileNotFound`] and
        [`Error::DirectoryNotFound`]; every other failure (corrupt file,
        unsupported container, codec negotiation, I/O) is wrapped into
        [`Error::OpenFailed`] with the cause attached.

        Open is all-or-nothing: if the video session cannot be constructed,
        the container handle acquired in the same call is released before
        the error propagates.
    */
    pub fn open<B>(backend: &B, path: impl AsRef<Path>, options: MediaOptions) -> Result<Self>
    where
        B: DecoderBackend + ?Sized,
    {
        let path = path.as_ref();
        let mut container = backend
            .open_container(path, &options)
            .map_err(Error::from)?;

        let video = if container.has_video_stream() {
            match container.video_stream_handle() {
                Some(stream) => match VideoSession::new(stream, &options) {
                    Ok(video) => Some(video),
                    Err(e) => {
                        // All-or-nothing: nothing acquired during a failed
                        // open may outlive it.
                        container.release();
                        return Err(Error::open_failed(e));
                    }
                },
                None => None,
            }
        } else {
            None
        };

        tracing::debug!(
            path = %path.display(),
            has_video = video.is_some(),
            "media session opened"
        );

        Ok(Self {
            container,
            video,
            closed: AtomicBool::new(false),
        })
    }

    /**
        Returns true if the file contains a video stream and the stream is
        loaded. Reports false once the session is closed.
    */
    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    /**
        Get the video stream session, or `None` if the container has no
        video stream or the session is closed.
    */
    pub fn video(&self) -> Option<&VideoSession> {
        if self.is_closed() {
            return None;
        }
        self.video.as_ref()
    }

    /**
        Get the video stream session mutably. Same liveness rules as
        [`video`](MediaSession::video).
    */
    pub fn video_mut(&mut self) -> Option<&mut VideoSession> {
        if self.is_closed() {
            return None;
        }
        self.video.as_mut()
    }

    /**
        Returns true once [`close`](MediaSession::close) has run.
    */
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /**
        Release the session's native resources.

        Idempotent: the first call releases the stream decoder, then the
        container, then marks the session closed; later calls (including
        the one from `Drop`) are no-ops. Close never fails.
    */
    pub fn close(&mut self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        // Stream decoder first; it must not outlive the container.
        if let Some(mut video) = self.video.take() {
            video.close();
        }
        self.container.release();

        tracing::debug!("media session closed");
    }
}

impl Drop for MediaSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for MediaSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaSession")
            .field("has_video", &self.has_video())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
