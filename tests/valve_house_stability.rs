use approx::assert_relative_eq;
use vault_stability::prelude::*;

fn camanche_report() -> StabilityReport {
    analyze(
        &AnalysisInput::camanche_valve_house(),
        &AnalyticGeometry,
        &AnalysisOptions::default(),
    )
    .unwrap()
}

#[test]
fn camanche_legs_are_resolved_but_excluded() {
    let report = camanche_report();
    assert_eq!(report.components.len(), 8);
    assert_eq!(report.excluded.len(), 2);
    assert!(report.excluded.iter().all(|c| c.role.is_support_leg()));
    assert!(report.excluded.iter().all(|c| c.volume > 0.0));
    assert!(report
        .components
        .iter()
        .all(|c| !c.load.role.is_support_leg()));
}

#[test]
fn camanche_base_slab_weight() {
    let report = camanche_report();
    let base = report.component("base slab").unwrap();
    assert_relative_eq!(base.load.volume, 547.5, max_relative = 1e-12);
    assert_relative_eq!(base.load.weight, 82_125.0, max_relative = 1e-9);
    assert_relative_eq!(base.weight_arm, 7.5);
    assert_relative_eq!(base.inertia_arm, 0.25);
}

#[test]
fn every_component_obeys_load_identities() {
    let report = camanche_report();
    let props = SiteProperties::camanche();
    for c in &report.components {
        assert!(c.load.volume > 0.0, "{} has no volume", c.load.id);
        assert_relative_eq!(c.load.weight, c.load.volume * props.g_conc, max_relative = 1e-9);
        assert_relative_eq!(c.load.inertia, c.load.weight * props.pga_eff, max_relative = 1e-9);
        assert_eq!(c.weight_arm, c.load.centroid.x);
        assert_eq!(c.inertia_arm, c.load.centroid.z);
        assert!(c.inertia_moment <= 0.0);
    }
}

#[test]
fn camanche_soil_loads() {
    let report = camanche_report();
    let lateral = &report.lateral;

    assert_relative_eq!(lateral.active.force, -0.5 * 40.56 * 81.0 * 16.67, max_relative = 1e-12);
    assert_relative_eq!(lateral.active.arm, 3.0, max_relative = 1e-12);
    assert_relative_eq!(lateral.seismic_increment.arm, 6.0, max_relative = 1e-12);
    assert_relative_eq!(lateral.passive.force, 104_852.9664, epsilon = 1e-3);
    assert_relative_eq!(lateral.passive.arm, 8.0 / 3.0, max_relative = 1e-12);
}

#[test]
fn camanche_totals_are_consistent() {
    let report = camanche_report();
    let e = &report.evaluation;

    let weight_moments: f64 = report.components.iter().map(|c| c.weight_moment).sum();
    let inertia_moments: f64 = report.components.iter().map(|c| c.inertia_moment).sum();
    assert_relative_eq!(e.resisting, weight_moments + report.lateral.passive.moment, max_relative = 1e-12);
    assert_relative_eq!(e.seismic_inertia, inertia_moments, max_relative = 1e-12);
    assert_relative_eq!(
        e.overturning,
        report.lateral.active.moment + report.lateral.seismic_increment.moment + inertia_moments,
        max_relative = 1e-12
    );
    assert_relative_eq!(e.factor_of_safety, (e.resisting / e.overturning).abs(), max_relative = 1e-12);

    assert!(e.factor_of_safety > 3.0 && e.factor_of_safety < 3.6);
    assert!(report.is_stable());
    assert_eq!(report.summary().num_components, 8);

    assert!(e.overturning < 0.0);
    assert_eq!(e.overturning_magnitude(), -e.overturning);
    let summary = report.summary();
    assert!(summary.overturning_kip_ft > 0.0);
    assert_relative_eq!(summary.overturning_kip_ft, -e.overturning / 1000.0, epsilon = 0.006);
}

#[test]
fn analysis_is_idempotent() {
    assert_eq!(camanche_report(), camanche_report());
    let json_a = serde_json::to_string(&camanche_report()).unwrap();
    let json_b = serde_json::to_string(&camanche_report()).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn factor_of_safety_decreases_with_pga() {
    let base = AnalysisInput::camanche_valve_house();
    let mut previous = f64::INFINITY;
    for pga in [0.0, 0.1, 0.2, 0.4, 0.8] {
        let input = AnalysisInput {
            properties: base.properties.clone().with_pga_eff(pga),
            ..base.clone()
        };
        let fs = analyze(&input, &AnalyticGeometry, &AnalysisOptions::default())
            .unwrap()
            .factor_of_safety();
        assert!(fs < previous, "FS {fs} at pga {pga} not below {previous}");
        previous = fs;
    }
}

#[test]
fn zero_overturning_is_degenerate() {
    let base = AnalysisInput::camanche_valve_house();
    let properties = SiteProperties {
        pga_eff: 0.0,
        g_active: 0.0,
        g_eq: 0.0,
        ..base.properties.clone()
    };
    let input = AnalysisInput { properties, ..base };
    let err = analyze(&input, &AnalyticGeometry, &AnalysisOptions::default()).unwrap_err();
    assert!(matches!(err, StabilityError::DegenerateLoad { .. }));
    assert!(!err.is_configuration());
}

#[test]
fn monitoring_vault_places_interior_beams() {
    let report = analyze(
        &AnalysisInput::seepage_monitoring_vault(),
        &AnalyticGeometry,
        &AnalysisOptions::default(),
    )
    .unwrap();
    assert_eq!(report.archetype, "monitoring_vault");
    assert_eq!(report.components.len(), 8);
    assert!(report.excluded.is_empty());

    let beam_1 = report.component("int beam 1").unwrap();
    let beam_2 = report.component("int beam 2").unwrap();
    assert!(beam_1.load.centroid.y > beam_2.load.centroid.y);
    assert_relative_eq!(beam_1.load.centroid.z, 2.5);
    assert_relative_eq!(beam_1.load.volume, (10.667 - 4.0) * 4.0, max_relative = 1e-12);
}

#[test]
fn json_input_file_round_trip() {
    let input = AnalysisInput::seepage_monitoring_vault();
    let dir = std::env::temp_dir().join(format!("vault-stability-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("vault.json");
    std::fs::write(&path, input.to_json().unwrap()).unwrap();

    let loaded = AnalysisInput::from_path(&path).unwrap();
    assert_eq!(loaded, input);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_input_file_is_io_error() {
    let err = AnalysisInput::from_path("/nonexistent/vault.json").unwrap_err();
    assert!(matches!(err, StabilityError::IoError(_)));
}

#[test]
fn report_display_lists_totals() {
    let text = camanche_report().to_string();
    assert!(text.contains("Resisting:"));
    assert!(text.contains("Overturning:"));
    assert!(text.contains("(excluded)"));
    assert!(text.contains("stable"));
}
