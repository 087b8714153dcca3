//! Headless driver: evaluate the stock nine-pigment comparison and print the
//! curves as a TSV table on stdout (for piping into other tools, no files
//! are written).

use anyhow::{Context, Result};

use opsin_viewer::template::{PigmentSpec, SensitivityCurve, WavelengthRange};

fn main() -> Result<()> {
    env_logger::init();

    let range = WavelengthRange::default();
    let samples = range.samples();

    let mut specs = Vec::new();
    for lambda_max in [400.0, 525.0, 650.0] {
        for a1_percent in [100.0, 50.0, 0.0] {
            specs.push(PigmentSpec::new(lambda_max).with_a1_percent(a1_percent));
        }
    }

    let curves: Vec<SensitivityCurve> = specs
        .iter()
        .map(|spec| {
            spec.evaluate(&samples)
                .with_context(|| format!("evaluating {}", spec.label()))
        })
        .collect::<Result<_>>()?;

    // Header row: wavelength plus one column per pigment.
    let mut header = String::from("wavelength_nm");
    for spec in &specs {
        header.push('\t');
        header.push_str(&spec.label());
    }
    println!("{header}");

    for (i, &w) in samples.iter().enumerate() {
        let mut row = format!("{w:.1}");
        for curve in &curves {
            row.push_str(&format!("\t{:.6}", curve.values[i]));
        }
        println!("{row}");
    }

    log::info!(
        "Printed {} curves over {} wavelengths",
        curves.len(),
        samples.len()
    );

    Ok(())
}
