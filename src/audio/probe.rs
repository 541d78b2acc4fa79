use std::path::Path;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use crate::{Result, ThemeError};

/// Reads the container header of a fetched theme and returns its length in
/// seconds, when the stream declares one.
pub fn probe_duration(path: impl AsRef<Path>) -> Result<Option<f64>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| ThemeError::Probe(e.to_string()))?;

    let format = probed.format;
    let Some(track) = format.default_track() else {
        return Ok(None);
    };

    let params = &track.codec_params;
    let duration = match (params.time_base, params.n_frames) {
        (Some(time_base), Some(n_frames)) => {
            let time = time_base.calc_time(n_frames);
            Some(time.seconds as f64 + time.frac)
        }
        _ => None,
    };

    Ok(duration)
}
