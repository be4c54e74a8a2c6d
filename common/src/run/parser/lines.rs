use crate::run::core::RunSetup;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Parses the line-oriented run-file format: six entries in order
/// (function, dimensionality, iterations, tolerance, step size,
/// space-separated initial point), `//` starting an end-of-line comment.
pub fn parse(filename: &str) -> Result<RunSetup> {
    let file =
        File::open(filename).context(format!("Failed to open run file: {}", filename))?;
    parse_reader(BufReader::new(file))
}

fn parse_reader<R: BufRead>(reader: R) -> Result<RunSetup> {
    let mut fields = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let data = line.split("//").next().unwrap_or("").trim().to_string();
        if data.is_empty() {
            continue;
        }
        fields.push(data);
    }

    if fields.len() != 6 {
        bail!(
            "Run file carries {} entries, expected 6: function, dimensionality, iterations, tolerance, step size, initial point",
            fields.len()
        );
    }

    let dimensionality: usize = fields[1]
        .parse()
        .context(format!("Invalid dimensionality: '{}'", fields[1]))?;
    let iterations: usize = fields[2]
        .parse()
        .context(format!("Invalid iteration cap: '{}'", fields[2]))?;
    let tolerance: f64 = fields[3]
        .parse()
        .context(format!("Invalid tolerance: '{}'", fields[3]))?;
    let step_size: f64 = fields[4]
        .parse()
        .context(format!("Invalid step size: '{}'", fields[4]))?;

    let initial_point = fields[5]
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .context(format!("Invalid initial-point coordinate: '{}'", token))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(RunSetup {
        function_name: fields[0].clone(),
        dimensionality,
        iterations,
        tolerance,
        step_size,
        initial_point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_the_six_field_format() {
        let text = "\
rosenbrock // objective function
2          // dimensionality
50         // iteration cap
0.0001     // tolerance
0.001      // step size
-1.2 1.0   // initial point
";
        let setup = parse_reader(Cursor::new(text.as_bytes())).unwrap();
        assert_eq!(setup.function_name, "rosenbrock");
        assert_eq!(setup.dimensionality, 2);
        assert_eq!(setup.iterations, 50);
        assert_eq!(setup.tolerance, 0.0001);
        assert_eq!(setup.step_size, 0.001);
        assert_eq!(setup.initial_point, vec![-1.2, 1.0]);
    }

    #[test]
    fn skips_blank_and_comment_only_lines() {
        let text = "quadratic\n\n// a note\n2\n100\n0.0001\n0.1\n4.0 4.0\n";
        let setup = parse_reader(Cursor::new(text.as_bytes())).unwrap();
        assert_eq!(setup.function_name, "quadratic");
        assert_eq!(setup.initial_point.len(), 2);
    }

    #[test]
    fn refuses_truncated_files() {
        let text = "quadratic\n2\n100\n";
        assert!(parse_reader(Cursor::new(text.as_bytes())).is_err());
    }

    #[test]
    fn refuses_malformed_numbers() {
        let text = "quadratic\ntwo\n100\n0.0001\n0.1\n4.0 4.0\n";
        assert!(parse_reader(Cursor::new(text.as_bytes())).is_err());
    }
}
