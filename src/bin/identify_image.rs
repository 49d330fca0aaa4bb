// Identify a plant photo from the command line
//
// Usage: cargo run --bin identify_image -- <image-path> [seed]
// Prints the identification result and the color profile as JSON.

use std::path::PathBuf;

use flora_identifier::identify::{default_identification, identify_profile, ColorProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);

    let path: PathBuf = match args.next() {
        Some(p) => p.into(),
        None => anyhow::bail!("usage: identify_image <image-path> [seed]"),
    };

    let mut rng = match args.next() {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };

    // Decode once; the profile is printed alongside the result
    let profile = match ColorProfile::from_path(&path) {
        Ok(profile) => Some(profile),
        Err(e) => {
            eprintln!("warning: {}, using default pool", e);
            None
        }
    };

    let result = match profile.as_ref().map(|p| identify_profile(p, &mut rng)) {
        Some(Ok(result)) => result,
        Some(Err(e)) => {
            eprintln!("warning: {}, using default pool", e);
            default_identification(&mut rng)
        }
        None => default_identification(&mut rng),
    };

    let output = serde_json::json!({
        "image": path.display().to_string(),
        "profile": profile,
        "result": result,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
