// Runs the known-answer vectors against the public API and exports them as JSON

mod known_answers;

use gf2_cyclic::prelude::*;
use known_answers::{cyclic, detection};

#[test]
fn test_encoding_vectors() {
    for vector in cyclic::all_vectors() {
        let message = BitVector::from_bit_str(&vector.message).unwrap();
        let code = CyclicCode::from_bit_str(&vector.generator, message.width()).unwrap();
        let trace = code.encode_traced(&message).unwrap();

        assert_eq!(trace.shifted.to_string(), vector.shifted, "{:?}", vector);
        assert_eq!(trace.remainder.to_string(), vector.remainder, "{:?}", vector);
        assert_eq!(trace.codeword.to_string(), vector.codeword, "{:?}", vector);
        assert_eq!(
            encode(&vector.message, &vector.generator).unwrap(),
            vector.codeword
        );
    }
}

#[test]
fn test_encoding_vectors_are_codewords() {
    for vector in cyclic::all_vectors() {
        let codeword = BitVector::from_bit_str(&vector.codeword).unwrap();
        let generator = BitVector::from_bit_str(&vector.generator).unwrap();
        let (_, remainder) = gf2_divide(codeword.value(), generator.value()).unwrap();
        assert_eq!(remainder, 0, "{:?}", vector);
    }
}

#[test]
fn test_detection_vectors() {
    for vector in detection::standard_vectors() {
        let codeword = BitVector::from_bit_str(&vector.codeword).unwrap();
        let generator = BitVector::from_bit_str(&vector.generator).unwrap();
        let table = analyze_bits(&codeword, &generator).unwrap();

        let detected: Vec<u64> = table.classes().iter().map(|c| c.detected).collect();
        assert_eq!(detected, vector.detected, "{:?}", vector);
        assert_eq!(
            table.minimum_undetected_weight(),
            vector.minimum_undetected_weight,
            "{:?}",
            vector
        );
        assert_eq!(table.total_patterns(), (1u64 << codeword.width()) - 1);
    }
}

#[test]
fn test_export_vectors() {
    let output_dir = tempfile::tempdir().unwrap();

    let encoding_json = serde_json::to_string_pretty(&cyclic::all_vectors())
        .expect("Failed to serialize encoding vectors");
    let encoding_path = output_dir.path().join("encoding.json");
    std::fs::write(&encoding_path, encoding_json).unwrap();

    let detection_json = serde_json::to_string_pretty(&detection::standard_vectors())
        .expect("Failed to serialize detection vectors");
    let detection_path = output_dir.path().join("detection.json");
    std::fs::write(&detection_path, detection_json).unwrap();

    let reloaded: Vec<cyclic::EncodingVector> =
        serde_json::from_str(&std::fs::read_to_string(&encoding_path).unwrap()).unwrap();
    assert_eq!(reloaded.len(), cyclic::all_vectors().len());

    let reloaded: Vec<detection::DetectionVector> =
        serde_json::from_str(&std::fs::read_to_string(&detection_path).unwrap()).unwrap();
    assert_eq!(reloaded.len(), detection::standard_vectors().len());
}
