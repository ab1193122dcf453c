use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mediakit_ffmpeg::FfmpegBackend;
use mediakit_session::MediaSession;
use mediakit_types::MediaOptions;

#[derive(Parser, Debug)]
#[command(name = "mediaprobe")]
#[command(about = "Print the decodable video stream parameters of a media file")]
struct Args {
    /// Path to the media file
    path: PathBuf,

    /// Demuxer probe size in bytes
    #[arg(long)]
    probe_size: Option<u64>,

    /// Demuxer private option as key=value (repeatable)
    #[arg(long = "demuxer-option", value_parser = parse_key_value)]
    demuxer_options: Vec<(String, String)>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{s}`"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut options = MediaOptions::new();
    if let Some(probe_size) = args.probe_size {
        options = options.with_probe_size(probe_size);
    }
    for (key, value) in args.demuxer_options {
        options = options.with_demuxer_option(key, value);
    }

    let backend = FfmpegBackend::new();
    let mut session = match MediaSession::open(&backend, &args.path, options) {
        Ok(session) => session,
        Err(e) if e.is_not_found() => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match session.video() {
        Some(video) => {
            let info = video.info();
            println!("codec:      {}", info.codec_name);
            println!("resolution: {}x{}", info.width, info.height);
            if info.frame_rate.num > 0 {
                println!(
                    "frame rate: {} ({:.3} fps)",
                    info.frame_rate,
                    info.frame_rate.to_f64()
                );
            } else {
                println!("frame rate: unknown");
            }
            match info.duration {
                Some(duration) => println!("duration:   {:.2}s", duration.as_secs_f64()),
                None => println!("duration:   unknown"),
            }
        }
        None => println!("no decodable video stream"),
    }

    session.close();
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_parsing() {
        assert_eq!(
            parse_key_value("fflags=discardcorrupt").unwrap(),
            ("fflags".to_string(), "discardcorrupt".to_string())
        );
        assert!(parse_key_value("no-equals").is_err());
    }
}
