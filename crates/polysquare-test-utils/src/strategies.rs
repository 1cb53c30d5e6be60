//! Proptest strategies for alphabets and text.

use proptest::prelude::*;

/// A duplicate-free alphabet of 1 to `max_len` arbitrary `char`s, in
/// random order.
pub fn arb_alphabet(max_len: usize) -> impl Strategy<Value = Vec<char>> {
    prop::collection::hash_set(any::<char>(), 1..=max_len.max(1))
        .prop_map(|set| set.into_iter().collect::<Vec<char>>())
        .prop_shuffle()
}

/// An alphabet plus a string of up to `max_text` symbols drawn only from it.
pub fn arb_alphabet_and_text(
    max_alphabet: usize,
    max_text: usize,
) -> impl Strategy<Value = (Vec<char>, String)> {
    arb_alphabet(max_alphabet).prop_flat_map(move |alphabet| {
        let n = alphabet.len();
        let text = prop::collection::vec(0..n, 0..=max_text);
        (Just(alphabet), text).prop_map(|(alphabet, picks)| {
            let text: String = picks.iter().map(|&i| alphabet[i]).collect();
            (alphabet, text)
        })
    })
}
