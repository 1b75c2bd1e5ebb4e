use cuival::validator::validate_cui;

fn main() {
    println!("=== CUI/CIF Validation ===\n");

    let inputs = [
        "18547290",      // valid, bare
        "RO18547290",    // valid, VAT prefix
        "18 547-290",    // valid, separators
        "27",            // shortest valid CUI
        "18547291",      // wrong control digit
        "00123456",      // leading zeros, bad checksum
        "12345678901",   // too long
        "RO123ABC",      // non-digit content
    ];

    for input in &inputs {
        let result = validate_cui(input);
        if result.valid {
            println!(
                "  {input:>14} => valid (normalized: {}, vat_prefix: {})",
                result.normalized.as_deref().unwrap_or(""),
                result.vat_prefix_present
            );
        } else {
            println!(
                "  {input:>14} => INVALID: {}",
                result.error.as_deref().unwrap_or("")
            );
        }
    }
}
