use std::path::Path;

#[test]
fn bundled_cases_load_and_compile() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../cases");
    let cases = [
        "01_vertical_well_newtonian.yaml",
        "02_build_and_hold_bingham.yaml",
        "03_horizontal_lateral_power_law.yaml",
    ];

    for name in cases {
        let path = root.join(name);
        let case = bf_case::load_case(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        let compiled = bf_case::compile_case(&case)
            .unwrap_or_else(|e| panic!("Failed to compile {}: {}", name, e));
        let outcome = bf_profile::compute_profile(&compiled.request())
            .unwrap_or_else(|e| panic!("Failed to compute {}: {}", name, e));
        assert!(
            outcome.max_total.total_pa > 0.0,
            "{} produced a non-positive peak pressure",
            name
        );
    }
}
