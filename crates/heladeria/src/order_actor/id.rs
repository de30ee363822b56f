//! Order id generation.

use crate::model::OrderId;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random base-36 part of an order id.
pub const SUFFIX_LEN: usize = 9;

impl OrderId {
    /// `ORD-<millis since epoch>-<random base-36 suffix>`.
    pub fn generate(now: DateTime<Utc>, rng: &mut impl Rng) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
            .collect();
        Self(format!("ORD-{}-{}", now.timestamp_millis(), suffix))
    }
}

/// Id generator for the order actor, stamping each id with the current time.
pub fn order_ids() -> impl FnMut() -> OrderId + Send + 'static {
    let mut rng = StdRng::from_entropy();
    move || OrderId::generate(Utc::now(), &mut rng)
}
