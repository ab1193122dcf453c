/*!
    The decoder backend contract.

    A decoder backend is the external collaborator that performs actual
    container parsing and decoder construction. The session layer opens,
    queries and releases it exclusively through these traits, so any
    demuxing library can sit behind a [`MediaSession`](crate::MediaSession).
*/

use std::path::Path;

use mediakit_types::{BackendError, MediaOptions, VideoStreamInfo};

/**
    A decoder backend: resolves filesystem paths into open container
    handles.
*/
pub trait DecoderBackend {
    /**
        Open the container at `path` with the given options.

        Backends must report a missing file as
        [`BackendError::FileNotFound`] and a missing containing directory
        as [`BackendError::DirectoryNotFound`]; every other failure goes
        through [`BackendError::Other`] with the cause attached.
    */
    fn open_container(
        &self,
        path: &Path,
        options: &MediaOptions,
    ) -> Result<Box<dyn ContainerHandle>, BackendError>;
}

/**
    An open, demuxed container.

    The handle is exclusively owned by one [`MediaSession`](crate::MediaSession)
    and released exactly once through [`release`](ContainerHandle::release).
*/
pub trait ContainerHandle: Send {
    /**
        Returns true if the container exposes a decodable video stream.
    */
    fn has_video_stream(&self) -> bool;

    /**
        Take the video stream handle out of the container.

        Returns `None` if the container has no video stream or the handle
        was already taken; the session layer calls this at most once.
    */
    fn video_stream_handle(&mut self) -> Option<Box<dyn StreamHandle>>;

    /**
        Release the container. Must be idempotent: releasing an already
        released container is a no-op.

        Stream handles taken from this container must be released before
        the container itself; they may hold references into its address
        space.
    */
    fn release(&mut self);
}

/**
    A decodable video stream taken from a container.
*/
pub trait StreamHandle: Send {
    /**
        Resolve the stream's decode parameters, constructing the decoder
        eagerly so later decode calls never re-validate them.

        Fails if the codec parameters are unsupported or decoder
        construction is rejected.
    */
    fn resolve_parameters(
        &mut self,
        options: &MediaOptions,
    ) -> Result<VideoStreamInfo, BackendError>;

    /**
        Release the decode handle. Must be idempotent.
    */
    fn release(&mut self);
}
