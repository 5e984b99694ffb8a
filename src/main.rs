use scaledec::ScaledDecimal;

fn main() {
    println!("=== Canonical Parsing Demo ===\n");

    let examples = vec!["1.23", "-103.2", "0.0405", "1.2300", "-0.00", "4005012345"];

    for example in &examples {
        match example.parse::<ScaledDecimal>() {
            Ok(value) => {
                println!("  {example} ->");
                println!("    Unscaled: {}", value.unscaled());
                println!("    Scale:    {}", value.scale());
                println!("    Display:  {value}");
                println!();
            }
            Err(e) => println!("  Error parsing {example}: {e}\n"),
        }
    }

    println!("=== Exact Arithmetic Demo ===\n");

    let a: ScaledDecimal = "1.23".parse().unwrap();
    let b: ScaledDecimal = "4.56".parse().unwrap();

    println!("  {a} + {b} = {}", a.add(&b).unwrap());
    println!("  {a} - {b} = {}", a.sub(&b).unwrap());
    println!("  {a} * {b} = {}", a.mul(&b).unwrap());
    println!("  {a} / {b} = {}", a.div(&b).unwrap());

    // The classic binary-float failure, exact here
    let sum = ScaledDecimal::try_from(0.1)
        .unwrap()
        .add(0.2)
        .unwrap();
    println!("\n  0.1 + 0.2 = {sum} (exactly)");

    println!("\n=== Chained Operations Demo ===\n");

    let chained = a
        .add("4.56")
        .and_then(|v| v.mul(7.89))
        .and_then(|v| v.sub(0.12))
        .and_then(|v| v.div(3.45))
        .unwrap();
    println!("  (1.23 + 4.56) * 7.89 - 0.12, divided by 3.45:");
    println!("    exact:  {chained}");
    println!("    as f64: {}", chained.to_f64());

    println!("\n=== Error Handling Demo ===\n");

    for bad in ["1.2.3", "abc", "--1", ""] {
        match bad.parse::<ScaledDecimal>() {
            Ok(v) => println!("  {bad:?} unexpectedly parsed as {v}"),
            Err(e) => println!("  {bad:?} rejected: {e}"),
        }
    }

    match a.div("0") {
        Ok(v) => println!("  1.23 / 0 unexpectedly produced {v}"),
        Err(e) => println!("  1.23 / 0 rejected: {e}"),
    }

    println!("\n=== Demo Complete ===");
}
