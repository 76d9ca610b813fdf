//! Stability Example - Camanche valve house and seepage monitoring vault
//!
//! Pass a JSON input file as the first argument to analyze it instead.

use anyhow::Context;
use vault_stability::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let inputs = match std::env::args().nth(1) {
        Some(path) => vec![(
            path.clone(),
            AnalysisInput::from_path(&path).with_context(|| format!("loading {path}"))?,
        )],
        None => vec![
            ("Camanche valve house".to_string(), AnalysisInput::camanche_valve_house()),
            (
                "Seepage monitoring vault".to_string(),
                AnalysisInput::seepage_monitoring_vault(),
            ),
        ],
    };

    for (name, input) in &inputs {
        println!("=== {} ===\n", name);

        let report = analyze(input, &AnalyticGeometry, &AnalysisOptions::default())
            .with_context(|| format!("analyzing {name}"))?;
        println!("{}\n", report);

        // Sensitivity to the seismic coefficient
        println!("pga_eff sweep:");
        for pga in [0.0, 0.1, 0.2, 0.3, 0.4] {
            let swept = AnalysisInput {
                properties: input.properties.clone().with_pga_eff(pga),
                ..input.clone()
            };
            match analyze(&swept, &AnalyticGeometry, &AnalysisOptions::default()) {
                Ok(r) => println!(
                    "  pga_eff={:.2}: FS={:.3} ({})",
                    pga,
                    r.factor_of_safety(),
                    r.evaluation.classification
                ),
                Err(e) => println!("  pga_eff={:.2}: {}", pga, e),
            }
        }
        println!();
    }

    println!("=== Analysis Complete ===");
    Ok(())
}
