// Known-answer vectors for the cyclic encoder and the detection analyzer.
// Every codeword and detection count below was worked out independently by
// long division and by enumerating the error vectors.

pub mod cyclic;
pub mod detection;
