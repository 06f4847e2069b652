//! Generated game names.

use crate::config::NamesConfig;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;
use tracing::{debug, instrument};

/// Shortest token produced by [`random_name`].
pub const RANDOM_NAME_MIN: usize = 4;
/// Longest token produced by [`random_name`].
pub const RANDOM_NAME_MAX: usize = 10;

/// Random URL-safe token, 4 to 10 characters long.
///
/// Draws `len` bytes from the thread-local CSPRNG, base64url-encodes them
/// and keeps the first `len` characters.
#[instrument]
pub fn random_name() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(RANDOM_NAME_MIN..=RANDOM_NAME_MAX);
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);

    // ceil(4 * len / 3) >= len, so there is always enough to cut.
    let mut token = URL_SAFE_NO_PAD.encode(&bytes);
    token.truncate(len);
    debug!(len, "Generated random name");
    token
}

impl NamesConfig {
    /// Joins a random adjective, a random noun and a number in `1..=9999`,
    /// e.g. `bold-frog-8249`. Collisions are possible.
    #[instrument(skip(self))]
    pub fn haiku_name(&self) -> String {
        let mut rng = rand::rng();
        // Lists are non-empty by construction.
        let adjective = &self.adjectives()[rng.random_range(0..self.adjectives().len())];
        let noun = &self.nouns()[rng.random_range(0..self.nouns().len())];
        let number: u16 = rng.random_range(1..=9999);
        format!("{adjective}-{noun}-{number}")
    }
}
