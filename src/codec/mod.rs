//! Run-length codec.
//!
//! Encoding groups consecutive equal characters into [`Run`]s and writes each
//! as an optional decimal count followed by the symbol (`"AAAB"` → `"3AB"`).
//! Decoding is a finite-state scan that rejects malformed input instead of
//! passing unmatched fragments through.
//!
//! ASCII digits cannot be told apart from count prefixes, so the encoder
//! refuses them; the round-trip law holds for every digit-free input.

mod rle;

pub use rle::{
    DEFAULT_MAX_DECODED_LEN, Run, encode_runs, parse_runs, run_length_decode,
    run_length_decode_with_limit, run_length_encode, runs_to_string,
};
