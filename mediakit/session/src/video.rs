/*!
    Video stream session.
*/

use mediakit_types::{BackendError, MediaOptions, VideoStreamInfo};

use crate::backend::StreamHandle;

/**
    One decodable video stream, owned by its enclosing
    [`MediaSession`](crate::MediaSession).

    The stream parameters are resolved once, at construction, and are
    immutable afterwards. The decode handle is released only as part of the
    owning session's teardown; it never outlives the container it was taken
    from.
*/
pub struct VideoSession {
    handle: Box<dyn StreamHandle>,
    info: VideoStreamInfo,
    options: MediaOptions,
    released: bool,
}

impl VideoSession {
    /**
        Wrap a stream handle, resolving its decode parameters eagerly.

        On failure the handle is released before the error propagates, so
        no half-initialized session is ever observable.
    */
    pub(crate) fn new(
        mut handle: Box<dyn StreamHandle>,
        options: &MediaOptions,
    ) -> Result<Self, BackendError> {
        let info = match handle.resolve_parameters(options) {
            Ok(info) => info,
            Err(e) => {
                handle.release();
                return Err(e);
            }
        };

        Ok(Self {
            handle,
            info,
            options: options.clone(),
            released: false,
        })
    }

    /**
        Get the resolved stream parameters.
    */
    pub fn info(&self) -> &VideoStreamInfo {
        &self.info
    }

    /**
        Get the options this stream was opened with.
    */
    pub fn options(&self) -> &MediaOptions {
        &self.options
    }

    /// Releases the decode handle. Owner-only; idempotent because the
    /// owner's own close may run more than once.
    pub(crate) fn close(&mut self) {
        if self.released {
            return;
        }
        self.handle.release();
        self.released = true;
    }
}

impl Drop for VideoSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for VideoSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoSession")
            .field("info", &self.info)
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}
