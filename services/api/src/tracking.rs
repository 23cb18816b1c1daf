//! Tracking identifier generation
//!
//! A tracking id is the base-36 encoding of the current millisecond
//! timestamp followed by 6 random base-36 characters. The timestamp prefix
//! keeps ids roughly sortable by creation time; the random suffix makes
//! collisions negligible without a central counter. There is no
//! retry-on-collision loop: a collision surfaces to the caller as a
//! uniqueness failure.

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// Generate a new tracking identifier
pub fn generate() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut id = to_base36(millis);

    let mut rng = rand::thread_rng();
    for _ in 0..SUFFIX_LEN {
        id.push(char::from(BASE36[rng.gen_range(0..BASE36.len())]));
    }

    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_is_non_empty_base36() {
        let id = generate();
        assert!(id.len() > SUFFIX_LEN);
        assert!(
            id.bytes().all(|b| BASE36.contains(&b)),
            "unexpected character in tracking id: {}",
            id
        );
    }

    #[test]
    fn consecutive_ids_differ() {
        let first = generate();
        let second = generate();
        assert_ne!(first, second);
    }

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }
}
