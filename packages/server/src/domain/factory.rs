//! Domain factories for creating domain entities and value objects.

use super::{ParticipantName, error::ValueObjectError};

const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
const VOWELS: &[u8] = b"aeiou";
const GENERATED_NAME_LEN: usize = 8;

/// Factory for generating ParticipantName instances.
///
/// Used by the transport when a client connects without a name or with a
/// name that is already taken.
pub struct ParticipantNameFactory;

impl ParticipantNameFactory {
    /// Generate a pronounceable 8-letter name from a random UUID v4.
    ///
    /// Letters alternate consonant / vowel, starting with a consonant.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for consistency
    /// with the domain error handling pattern.
    pub fn generate() -> Result<ParticipantName, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        let name: String = uuid
            .as_bytes()
            .iter()
            .take(GENERATED_NAME_LEN)
            .enumerate()
            .map(|(i, byte)| {
                let alphabet = if i % 2 == 0 { CONSONANTS } else { VOWELS };
                char::from(alphabet[usize::from(*byte) % alphabet.len()])
            })
            .collect();
        ParticipantName::new(name)
    }
}
