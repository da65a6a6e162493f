use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};

const SAMPLE_RATE: u32 = 44_100;

/// The two fire-and-forget cues, synthesized at startup. A cue that failed
/// to decode simply stays silent; playback never gets in the way of a round.
pub struct SoundBank {
    eat: Option<Sound>,
    round_over: Option<Sound>,
}

impl SoundBank {
    pub async fn load() -> Self {
        let eat = load_sound_from_bytes(&tone_wav(880.0, 0.08)).await.ok();
        let round_over = load_sound_from_bytes(&tone_wav(150.0, 0.35)).await.ok();
        Self { eat, round_over }
    }

    pub fn play_eat(&self) {
        play(&self.eat, 0.4);
    }

    pub fn play_round_over(&self) {
        play(&self.round_over, 0.6);
    }
}

fn play(sound: &Option<Sound>, volume: f32) {
    if let Some(sound) = sound {
        audio::play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
    }
}

/// Render a sine tone with a linear fade-out as PCM16 mono WAV bytes.
fn tone_wav(freq_hz: f32, seconds: f32) -> Vec<u8> {
    let samples = (seconds * SAMPLE_RATE as f32) as u32;
    let data_len = samples * 2;
    let mut wav = Vec::with_capacity(44 + data_len as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());

    for n in 0..samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let fade = 1.0 - n as f32 / samples as f32;
        let level = 0.6 * fade * (std::f32::consts::TAU * freq_hz * t).sin();
        let sample = (level * f32::from(i16::MAX)) as i16;
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}
