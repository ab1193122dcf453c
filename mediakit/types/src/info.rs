/*!
    Resolved video stream parameters.
*/

use std::fmt;
use std::time::Duration;

/**
    A rational number, used for frame rates (e.g. 24000/1001 for
    23.976 fps).
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    /**
        Create a new rational number.

        # Panics

        Panics if `den` is zero.
    */
    #[inline]
    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self { num, den }
    }

    /**
        Convert to f64.
    */
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/**
    Parameters of a decodable video stream, resolved eagerly when the
    stream session is constructed so that later decode calls never need to
    re-validate them.
*/
#[derive(Clone, Debug)]
pub struct VideoStreamInfo {
    /// Codec name as reported by the backend (e.g. "h264").
    pub codec_name: String,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frame rate of the stream.
    pub frame_rate: Rational,
    /// Stream duration, when the container reports one.
    pub duration: Option<Duration>,
}

impl VideoStreamInfo {
    /**
        Calculate the aspect ratio (width / height).
    */
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_to_f64() {
        assert_eq!(Rational::new(30, 1).to_f64(), 30.0);
        assert_eq!(Rational::new(24000, 1001).to_f64(), 24000.0 / 1001.0);
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn rational_zero_denominator_panics() {
        Rational::new(1, 0);
    }

    #[test]
    fn aspect_ratio() {
        let info = VideoStreamInfo {
            codec_name: "h264".into(),
            width: 1920,
            height: 1080,
            frame_rate: Rational::new(25, 1),
            duration: Some(Duration::from_secs(60)),
        };
        assert!((info.aspect_ratio() - 16.0 / 9.0).abs() < f32::EPSILON);
    }
}
