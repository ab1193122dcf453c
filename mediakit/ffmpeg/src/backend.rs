/*!
    Backend implementation over ffmpeg-next.
*/

use std::path::Path;
use std::time::Duration;

use ffmpeg_next::{Dictionary, codec, ffi, format, format::stream::Stream, media};

use mediakit_session::{ContainerHandle, DecoderBackend, StreamHandle};
use mediakit_types::{BackendError, MediaOptions, Rational, VideoStreamInfo};

/**
    Decoder backend over the FFmpeg libraries.

    Stateless; one backend value can open any number of independent
    containers.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegBackend;

impl FfmpegBackend {
    /**
        Create a new backend.
    */
    pub fn new() -> Self {
        Self
    }
}

impl DecoderBackend for FfmpegBackend {
    fn open_container(
        &self,
        path: &Path,
        options: &MediaOptions,
    ) -> Result<Box<dyn ContainerHandle>, BackendError> {
        ffmpeg_next::init().map_err(|e| BackendError::other(e))?;

        classify_path(path)?;

        let mut demuxer_options = Dictionary::new();
        if let Some(probe) = options.probe_size {
            demuxer_options.set("probesize", &probe.to_string());
        }
        for (key, value) in &options.demuxer_options {
            demuxer_options.set(key, value);
        }

        let input = format::input_with_dictionary(path, demuxer_options)
            .map_err(|e| BackendError::other(e))?;

        let video = input
            .streams()
            .best(media::Type::Video)
            .map(|stream| PendingStream {
                parameters: stream.parameters(),
                frame_rate: frame_rate_of(&stream),
                duration: duration_of(&stream, &input),
            });

        tracing::debug!(
            path = %path.display(),
            has_video = video.is_some(),
            "container opened"
        );

        Ok(Box::new(FfmpegContainer {
            input: Some(input),
            video,
        }))
    }
}

/**
    Classify a path before handing it to the demuxer, so a missing file and
    a missing containing directory stay distinguishable from demuxer
    failures.
*/
fn classify_path(path: &Path) -> Result<(), BackendError> {
    if path.is_file() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(BackendError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    if path.exists() {
        // Exists but is not a regular file; let the demuxer decide.
        return Ok(());
    }

    Err(BackendError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn frame_rate_of(stream: &Stream<'_>) -> Rational {
    let rate = stream.avg_frame_rate();
    if rate.numerator() > 0 && rate.denominator() > 0 {
        Rational::new(rate.numerator(), rate.denominator())
    } else {
        // Unknown frame rate (e.g. still-image containers).
        Rational::new(0, 1)
    }
}

fn duration_of(stream: &Stream<'_>, input: &format::context::Input) -> Option<Duration> {
    let time_base = stream.time_base();
    let duration = stream.duration();
    if duration > 0 && time_base.denominator() > 0 {
        let secs =
            duration as f64 * time_base.numerator() as f64 / time_base.denominator() as f64;
        if secs.is_finite() && secs > 0.0 {
            return Some(Duration::from_secs_f64(secs));
        }
    }

    // Fall back to the container duration (AV_TIME_BASE units).
    let duration = input.duration();
    if duration > 0 {
        return Some(Duration::from_secs_f64(
            duration as f64 / f64::from(ffi::AV_TIME_BASE),
        ));
    }

    None
}

/// Stream data captured at container-open time, consumed when the stream
/// handle resolves its decoder.
struct PendingStream {
    parameters: codec::Parameters,
    frame_rate: Rational,
    duration: Option<Duration>,
}

/**
    An open demuxer context.
*/
struct FfmpegContainer {
    input: Option<format::context::Input>,
    video: Option<PendingStream>,
}

// SAFETY: the demuxer context is only ever touched by one thread at a
// time; the session layer requires caller-side exclusion for shared use.
unsafe impl Send for FfmpegContainer {}

impl ContainerHandle for FfmpegContainer {
    fn has_video_stream(&self) -> bool {
        self.video.is_some()
    }

    fn video_stream_handle(&mut self) -> Option<Box<dyn StreamHandle>> {
        let pending = self.video.take()?;
        Some(Box::new(FfmpegStream {
            pending: Some(pending),
            decoder: None,
        }))
    }

    fn release(&mut self) {
        // Dropping the input closes the demuxer; take() makes this a
        // no-op on repeat calls.
        if self.input.take().is_some() {
            self.video = None;
            tracing::debug!("container released");
        }
    }
}

impl Drop for FfmpegContainer {
    fn drop(&mut self) {
        ContainerHandle::release(self);
    }
}

/**
    A video stream's decode handle.
*/
struct FfmpegStream {
    pending: Option<PendingStream>,
    decoder: Option<codec::decoder::Video>,
}

// SAFETY: the decoder context is only ever touched by one thread at a
// time; the session layer requires caller-side exclusion for shared use.
unsafe impl Send for FfmpegStream {}

impl StreamHandle for FfmpegStream {
    fn resolve_parameters(
        &mut self,
        _options: &MediaOptions,
    ) -> Result<VideoStreamInfo, BackendError> {
        let pending = self
            .pending
            .take()
            .ok_or_else(|| BackendError::other("stream parameters already resolved"))?;

        let decoder_ctx = codec::context::Context::from_parameters(pending.parameters)
            .map_err(|e| BackendError::other(e))?;
        let decoder = decoder_ctx
            .decoder()
            .video()
            .map_err(|e| BackendError::other(e))?;

        if decoder.width() == 0 || decoder.height() == 0 {
            return Err(BackendError::other("video stream has no frame geometry"));
        }

        let codec_name = decoder
            .codec()
            .map(|c| c.name().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let info = VideoStreamInfo {
            codec_name,
            width: decoder.width(),
            height: decoder.height(),
            frame_rate: pending.frame_rate,
            duration: pending.duration,
        };

        self.decoder = Some(decoder);
        Ok(info)
    }

    fn release(&mut self) {
        if self.decoder.take().is_some() || self.pending.take().is_some() {
            tracing::debug!("stream decoder released");
        }
    }
}

impl Drop for FfmpegStream {
    fn drop(&mut self) {
        StreamHandle::release(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.mp4");
        let err = classify_path(&path).unwrap_err();
        assert!(matches!(err, BackendError::FileNotFound { .. }));
    }

    #[test]
    fn classify_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodir").join("clip.mp4");
        let err = classify_path(&path).unwrap_err();
        assert!(matches!(err, BackendError::DirectoryNotFound { .. }));
    }

    #[test]
    fn classify_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(classify_path(file.path()).is_ok());
    }

    #[test]
    fn classify_bare_relative_name() {
        // A bare file name has no parent directory component; a missing
        // one is a missing file, not a missing directory.
        let err = classify_path(Path::new("definitely-not-here.mkv")).unwrap_err();
        assert!(matches!(err, BackendError::FileNotFound { .. }));
    }
}
