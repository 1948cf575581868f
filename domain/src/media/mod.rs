//! Media payloads exchanged with the external services.
//!
//! - [`image::ImagePayload`]: one uploaded meal photo
//! - [`image::ImageParts`]: the image sequence attached to a generation call
//! - [`audio::SynthesizedAudio`]: one synthesized utterance

pub mod audio;
pub mod image;
