#![no_main]

use arbitrary::Arbitrary;
use gf2_cyclic::cyclic::encode;
use gf2_cyclic::polynomial::{gf2_divide, BitVector};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct EncodeFuzzInput {
    message: String,
    generator: String,
}

fuzz_target!(|input: EncodeFuzzInput| {
    // Arbitrary strings must be rejected cleanly, never panic
    let codeword = match encode(&input.message, &input.generator) {
        Ok(codeword) => codeword,
        Err(_) => return,
    };

    assert_eq!(
        codeword.len(),
        input.message.len() + input.generator.len() - 1
    );
    assert!(codeword.starts_with(&input.message));

    let codeword = BitVector::from_bit_str(&codeword).expect("codeword is a bit string");
    let generator = BitVector::from_bit_str(&input.generator).expect("generator was accepted");
    let (_, remainder) = gf2_divide(codeword.value(), generator.value()).expect("nonzero generator");
    assert_eq!(remainder, 0);
});
