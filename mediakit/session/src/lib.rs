/*!
    Media-session lifecycle management for the mediakit crate ecosystem.

    This crate turns a filesystem path into an open, ready-to-decode
    session, owns the exclusive handles to the container and its video
    stream decoder, translates backend failures into a stable error
    taxonomy, and releases everything exactly once regardless of how the
    session ends.

    The actual demuxing and decoding live behind the [`DecoderBackend`]
    trait; `mediakit-ffmpeg` provides the FFmpeg implementation.

    # Example

    ```ignore
    use mediakit_session::MediaSession;
    use mediakit_types::{Error, MediaOptions};

    let backend = mediakit_ffmpeg::FfmpegBackend::new();

    let mut session = match MediaSession::open(&backend, "clip.mp4", MediaOptions::new()) {
        Ok(session) => session,
        Err(Error::FileNotFound { path }) => {
            eprintln!("no such file: {}", path.display());
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if let Some(video) = session.video() {
        let info = video.info();
        println!("{} {}x{}", info.codec_name, info.width, info.height);
    }

    // Releases the stream decoder, then the container. Also runs on drop.
    session.close();
    ```

    # Non-blocking open

    ```ignore
    let task = MediaSession::open_async(backend, "clip.mp4", MediaOptions::new());
    // ... do other work ...
    let session = task.wait()?;
    ```
*/

pub use mediakit_types::{
    BackendError, Cause, Error, MediaOptions, Rational, Result, VideoStreamInfo,
};

mod backend;
mod session;
mod task;
mod video;

pub use backend::{ContainerHandle, DecoderBackend, StreamHandle};
pub use session::MediaSession;
pub use task::OpenTask;
pub use video::VideoSession;
