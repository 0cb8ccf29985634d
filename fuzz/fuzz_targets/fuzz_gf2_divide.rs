#![no_main]

use gf2_cyclic::polynomial::{bit_length, gf2_divide, gf2_multiply};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u64, u64)| {
    let (dividend, divisor) = input;

    match gf2_divide(dividend, divisor) {
        Ok((quotient, remainder)) => {
            assert_ne!(divisor, 0);
            if divisor > 1 {
                assert!(bit_length(remainder) < bit_length(divisor));
            }
            // quotient * divisor never exceeds the dividend's degree
            let product = gf2_multiply(quotient, divisor).expect("product fits in 64 bits");
            assert_eq!(product ^ remainder, dividend);
        }
        Err(_) => assert_eq!(divisor, 0),
    }
});
