/*!
    FFmpeg decoder backend for the mediakit crate ecosystem.

    Implements the `mediakit-session` backend contract on top of the
    `ffmpeg-next` bindings: demuxer open with forwarded demuxer options,
    video stream discovery, eager decoder construction from the stream's
    codec parameters, and idempotent release of every native handle.

    # Example

    ```ignore
    use mediakit_ffmpeg::FfmpegBackend;
    use mediakit_session::MediaSession;
    use mediakit_types::MediaOptions;

    let backend = FfmpegBackend::new();
    let session = MediaSession::open(&backend, "clip.mp4", MediaOptions::new())?;
    ```
*/

pub use mediakit_types::{BackendError, Error, MediaOptions, Result, VideoStreamInfo};

mod backend;

pub use backend::FfmpegBackend;
