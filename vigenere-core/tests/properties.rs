use proptest::prelude::*;
use vigenere_core::{decrypt, encrypt, estimate_key_length, transform, Direction, Key, Text};

fn key_strategy() -> impl Strategy<Value = Key> {
    "[A-Z]{1,32}".prop_map(|raw| Key::parse(&raw).unwrap())
}

proptest! {
    /// Property 1: Roundtrip fidelity
    /// Decrypting with the encryption key restores the normalized input.
    #[test]
    fn prop_roundtrip(key in key_strategy(), raw in ".{0,400}") {
        let text = Text::normalize(&raw);
        prop_assert_eq!(decrypt(&key, &encrypt(&key, &text)), text);
    }

    /// Property 2: A key made only of A leaves the text unchanged
    #[test]
    fn prop_identity_key(len in 1usize..=32, raw in "[a-zA-Z ]{0,200}") {
        let key = Key::parse(&"A".repeat(len)).unwrap();
        let text = Text::normalize(&raw);
        prop_assert_eq!(transform(Direction::Encrypt, &key, &text), text);
    }

    /// Property 3: The transform preserves length
    #[test]
    fn prop_length_preserved(key in key_strategy(), raw in "[A-Z]{0,300}") {
        let text = Text::normalize(&raw);
        prop_assert_eq!(encrypt(&key, &text).len(), text.len());
    }

    /// Property 4: The estimate stays in range for any text, short ones included
    #[test]
    fn prop_estimate_in_range(raw in "[A-Z]{0,80}", max_length in 1usize..=32) {
        let length = estimate_key_length(&Text::normalize(&raw), max_length);
        prop_assert!((1..=max_length).contains(&length));
    }
}
