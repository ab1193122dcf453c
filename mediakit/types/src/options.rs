/*!
    Open options for media sessions.
*/

/**
    Decoder settings passed into a session open operation.

    The value is resolved once by the caller and read by both the
    container-open step and the video session constructor; it is never
    mutated after open.
*/
#[derive(Clone, Debug, Default)]
pub struct MediaOptions {
    /// Demuxer private options forwarded verbatim to the container open
    /// call (e.g. `("fflags", "discardcorrupt")`).
    pub demuxer_options: Vec<(String, String)>,
    /// Override for the demuxer probe size, in bytes (None = demuxer
    /// default).
    pub probe_size: Option<u64>,
}

impl MediaOptions {
    /**
        Create options with default settings.
    */
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Add a demuxer private option.
    */
    pub fn with_demuxer_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.demuxer_options.push((key.into(), value.into()));
        self
    }

    /**
        Set the demuxer probe size in bytes.
    */
    pub fn with_probe_size(mut self, bytes: u64) -> Self {
        self.probe_size = Some(bytes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates() {
        let options = MediaOptions::new()
            .with_demuxer_option("fflags", "discardcorrupt")
            .with_demuxer_option("analyzeduration", "2000000")
            .with_probe_size(5_000_000);

        assert_eq!(options.demuxer_options.len(), 2);
        assert_eq!(options.demuxer_options[0].0, "fflags");
        assert_eq!(options.probe_size, Some(5_000_000));
    }

    #[test]
    fn default_is_empty() {
        let options = MediaOptions::new();
        assert!(options.demuxer_options.is_empty());
        assert!(options.probe_size.is_none());
    }
}
