use rand::Rng;
use std::fs::File;
use std::io::Write;

/// Writes a TOML run definition with a uniformly random initial point
/// inside `bounds`. Coordinates are kept at one decimal so the file stays
/// readable and the point stays inside the box after rendering.
pub fn generate_random_run(
    filename: &str,
    function: &str,
    dimensionality: usize,
    step_size: f64,
    bounds: (f64, f64),
) -> std::io::Result<()> {
    let mut file = File::create(filename)?;
    let mut rng = rand::thread_rng();
    let (low, high) = bounds;

    log::info!(
        "Generating random run: {} over {} coordinates in [{}, {}]",
        function,
        dimensionality,
        low,
        high
    );

    let point: Vec<String> = (0..dimensionality)
        .map(|_| format!("{:.1}", rng.gen_range(low..high)))
        .collect();

    writeln!(file, "[run]")?;
    writeln!(file, "function = \"{}\"", function)?;
    writeln!(file, "dimensionality = {}", dimensionality)?;
    writeln!(file, "iterations = 100")?;
    writeln!(file, "tolerance = 0.0001")?;
    writeln!(file, "step_size = {}", step_size)?;
    writeln!(file, "initial_point = [{}]", point.join(", "))?;
    Ok(())
}
