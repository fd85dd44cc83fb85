use crate::core::bass_energy;
use crate::core::constants::FFT_SIZE;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Frequency analyser tapped off the caller's audio source.
///
/// Purely best effort: any failure while wiring it up is logged and the
/// session simply runs with zero bass energy.
pub struct BassAnalyser {
    source: Option<web::AudioNode>,
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
}

impl BassAnalyser {
    pub fn connect(
        source: Option<&web::AudioNode>,
        context: Option<&web::AudioContext>,
    ) -> Option<Self> {
        if source.is_none() && context.is_none() {
            return None;
        }
        match Self::try_connect(source, context) {
            Ok(a) => {
                log::info!(
                    "[audio] analyser connected ({} bins, source: {})",
                    a.bins.len(),
                    a.source.is_some()
                );
                Some(a)
            }
            Err(e) => {
                log::warn!("[audio] analysis not available: {e:#}");
                None
            }
        }
    }

    fn try_connect(
        source: Option<&web::AudioNode>,
        context: Option<&web::AudioContext>,
    ) -> anyhow::Result<Self> {
        let context: web::BaseAudioContext = match (context, source) {
            (Some(ctx), _) => ctx.clone().unchecked_into(),
            (None, Some(src)) => src.context(),
            (None, None) => anyhow::bail!("no audio context"),
        };
        let analyser = web::AnalyserNode::new(&context)
            .map_err(|e| anyhow::anyhow!("create analyser: {e:?}"))?;
        analyser.set_fft_size(FFT_SIZE);
        if let Some(src) = source {
            src.connect_with_audio_node(&analyser)
                .map_err(|e| anyhow::anyhow!("connect source: {e:?}"))?;
        }
        let bins = vec![0u8; analyser.frequency_bin_count() as usize];
        Ok(Self {
            source: source.cloned(),
            analyser,
            bins,
        })
    }

    /// Read the current spectrum and reduce it to bass energy. A context
    /// without a connected source always reads silence.
    pub fn sample(&mut self) -> f32 {
        if self.source.is_none() {
            return 0.0;
        }
        self.analyser.get_byte_frequency_data(&mut self.bins);
        bass_energy(&self.bins)
    }

    pub fn disconnect(&mut self) -> anyhow::Result<()> {
        if let Some(src) = self.source.take() {
            src.disconnect_with_audio_node(&self.analyser)
                .map_err(|e| anyhow::anyhow!("disconnect source: {e:?}"))?;
            log::info!("[audio] analyser disconnected");
        }
        Ok(())
    }
}
