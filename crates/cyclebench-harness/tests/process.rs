//! End-to-end runs writing real artifacts.

use cyclebench_config::{OutputFormat, ProfileConfig};
use cyclebench_core::Operation;
use cyclebench_harness::{
    CompositeRenderer, CsvExporter, Harness, Renderer, SizeSweep, SvgChart,
};

#[test]
fn process_writes_one_artifact_per_format() {
    let dir = tempfile::tempdir().unwrap();
    let sweep = SizeSweep::linear(3, 10).unwrap();
    let harness = Harness::new(sweep.clone()).with_repetitions(1);

    let formats = [
        OutputFormat::Svg,
        OutputFormat::Csv,
        OutputFormat::Markdown,
        OutputFormat::Json,
    ];
    let mut renderer = CompositeRenderer::for_formats(&formats, &sweep);

    let written = harness
        .process(&mut renderer, dir.path().join("comprehension_vs_cycle_tiny"))
        .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "comprehension_vs_cycle_tiny.svg",
            "comprehension_vs_cycle_tiny.csv",
            "comprehension_vs_cycle_tiny.md",
            "comprehension_vs_cycle_tiny.json",
        ]
    );
    for path in &written {
        assert!(path.exists(), "{} missing", path.display());
    }

    let svg = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(svg.matches("<polyline").count(), Operation::ALL.len());
    for operation in Operation::ALL {
        assert!(svg.contains(operation.label()), "legend lacks {operation}");
    }

    let csv = std::fs::read_to_string(&written[1]).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(
        rows[0],
        "size,build_mapping,filter_mapping,build_sequence,filter_sequence,build_set,filter_set"
    );
    assert_eq!(rows.len(), 4);
    assert!(rows[1].starts_with("10,"));
    assert!(rows[3].starts_with("30,"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written[3]).unwrap()).unwrap();
    assert_eq!(json["sizes"], serde_json::json!([10, 20, 30]));
    assert_eq!(json["series"].as_array().unwrap().len(), 6);
}

#[test]
fn profile_sweep_drives_series_length() {
    let profile = ProfileConfig::new("short", 4, 25);
    let sweep = SizeSweep::try_from(&profile).unwrap();
    let harness = Harness::new(sweep.clone()).with_repetitions(1);

    let mut csv = CsvExporter::new(sweep);
    harness.run(&mut csv).unwrap();

    // Header plus one row per size.
    assert_eq!(csv.to_csv().lines().count(), 5);
}

#[test]
fn renderers_can_be_driven_through_trait_objects() {
    let sweep = SizeSweep::new(vec![3, 1, 2]).unwrap();
    let harness = Harness::new(sweep.clone()).with_repetitions(1);

    let dir = tempfile::tempdir().unwrap();
    let mut boxed: Box<dyn Renderer> = Box::new(SvgChart::new(sweep));
    harness.run(&mut boxed).unwrap();
    let written = boxed.finalize(&dir.path().join("boxed")).unwrap();
    assert_eq!(written, vec![dir.path().join("boxed.svg")]);
}

#[test]
fn finalize_without_series_fails_for_chart() {
    let dir = tempfile::tempdir().unwrap();
    let mut chart = SvgChart::new(SizeSweep::new(vec![1]).unwrap());
    assert!(chart.finalize(&dir.path().join("empty")).is_err());
    assert!(!dir.path().join("empty.svg").exists());
}
