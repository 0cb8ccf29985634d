use gf2_cyclic::prelude::*;

const DEFAULT_MESSAGE: &str = "1010";
// g(x) = x^3 + x + 1
const DEFAULT_GENERATOR: &str = "1011";

fn main() {
    let mut args = std::env::args().skip(1);
    let message = args.next().unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    let generator = args.next().unwrap_or_else(|| DEFAULT_GENERATOR.to_string());

    if let Err(error) = run(&message, &generator) {
        eprintln!("error [{}]: {}", error.error_code(), error);
        eprintln!("{}", error.user_friendly_message());
        if let Some(remediation) = error.suggested_remediation() {
            eprintln!("hint: {}", remediation);
        }
        std::process::exit(1);
    }
}

fn run(message: &str, generator: &str) -> CodingResult<()> {
    let (trace, table) = encode_and_analyze(message, generator, &AnalysisConfig::default())?;

    println!("Message            m     = {}", trace.message);
    println!("Generator          g(x)  = {}", generator);
    println!("Shifted            x^r*m = {}", trace.shifted);
    println!("Remainder          mod g = {}", trace.remainder);
    println!("Codeword           v(x)  = {}", trace.codeword);
    println!();
    println!("Detection capability, n = {}:", table.length());
    print!("{}", table);
    println!();
    println!(
        "Overall: {} of {} error vectors detected ({:.2}%)",
        table.total_detected(),
        table.total_patterns(),
        table.overall_capability()
    );
    match table.minimum_undetected_weight() {
        Some(weight) => println!("Smallest undetected error multiplicity: {}", weight),
        None => println!("Every nonzero error vector is detected"),
    }

    Ok(())
}
