// Python bindings, the scripting-layer surface of the library

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::asset::{SoundWave, OGG_FORMAT};
use crate::quality::SoundQualityInfo;

/// Sound wave exposed to Python
#[pyclass(name = "SoundWave", frozen)]
pub struct PySoundWave {
    inner: SoundWave,
}

#[pymethods]
impl PySoundWave {
    #[getter]
    fn num_channels(&self) -> u32 {
        self.inner.num_channels
    }

    #[getter]
    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate
    }

    #[getter]
    fn duration(&self) -> f32 {
        self.inner.duration
    }

    #[getter]
    fn raw_pcm_data_size(&self) -> u64 {
        self.inner.raw_pcm_data_size
    }

    #[getter]
    fn compressed_data_guid(&self) -> String {
        self.inner.compressed_data_guid.to_string()
    }

    /// The Ogg bytes the wave was loaded from
    fn compressed_data<'py>(&self, py: Python<'py>) -> Option<Bound<'py, PyBytes>> {
        self.inner
            .compressed_format_data(OGG_FORMAT)
            .map(|data| PyBytes::new(py, data))
    }

    fn __repr__(&self) -> String {
        format!(
            "SoundWave(channels={}, sample_rate={}, duration={:.3})",
            self.inner.num_channels, self.inner.sample_rate, self.inner.duration
        )
    }
}

/// Header facts exposed to Python
#[pyclass(name = "SoundQualityInfo", frozen)]
pub struct PySoundQualityInfo {
    #[pyo3(get)]
    num_channels: u32,
    #[pyo3(get)]
    sample_rate: u32,
    #[pyo3(get)]
    duration: f32,
    #[pyo3(get)]
    sample_data_size: u64,
}

impl From<SoundQualityInfo> for PySoundQualityInfo {
    fn from(info: SoundQualityInfo) -> Self {
        PySoundQualityInfo {
            num_channels: info.num_channels,
            sample_rate: info.sample_rate,
            duration: info.duration,
            sample_data_size: info.sample_data_size,
        }
    }
}

/// Load a sound wave from an Ogg Vorbis file, or None if it can't be loaded
#[pyfunction]
fn sound_wave_from_file(path: &str) -> Option<PySoundWave> {
    crate::library::load_sound_wave(path).map(|inner| PySoundWave { inner })
}

/// Read header facts from Ogg Vorbis bytes, or None if the header is unreadable
#[pyfunction]
fn read_compressed_info(data: &[u8]) -> Option<PySoundQualityInfo> {
    crate::ogg::read_compressed_info(data)
        .inspect_err(|e| tracing::warn!("{}", e))
        .ok()
        .map(Into::into)
}

#[pymodule]
fn oggwave(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySoundWave>()?;
    m.add_class::<PySoundQualityInfo>()?;
    m.add_function(wrap_pyfunction!(sound_wave_from_file, m)?)?;
    m.add_function(wrap_pyfunction!(read_compressed_info, m)?)?;
    Ok(())
}
