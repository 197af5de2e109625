//! Cross-crate tests: notebook, batch runner, sweep, and CLI outputs together.

use corrlab_cli::output::{write_csv, OutputFormat};
use corrlab_cli::plot::render_svg_string;
use corrlab_cli::presenter::CLIReportPresenter;
use corrlab_core::graph::{CellId, Notebook};
use corrlab_core::params::{ParamId, Params};
use corrlab_core::progress::CancellationToken;
use corrlab_core::{correlation, generate_seeded, DEFAULT_SEED};
use corrlab_pipeline::interfaces::NullProgressReporter;
use corrlab_pipeline::runner::{run_batch, RunOptions};
use corrlab_pipeline::sweep::{run_sweep, SweepConfig};

/// Bit pattern of r for n = 200, slope = 2.0, noise = 1.0, seed = 42.
const REFERENCE_R_BITS: u64 = 0x3fee_aeee_2da6_de21;
/// Bit patterns of the first (x, y) pair of the same dataset.
const REFERENCE_FIRST_POINT_BITS: (u64, u64) = (0x3fb5_9468_6b0e_3f80, 0x3fdb_8cf9_a043_cc3d);

fn silent() -> CLIReportPresenter {
    CLIReportPresenter::new(OutputFormat::Json, false, None)
}

#[test]
fn reference_configuration_is_reproducible() {
    let params = Params::default();
    let mut first = Notebook::new(params, DEFAULT_SEED);
    let mut second = Notebook::new(params, DEFAULT_SEED);
    let a = run_batch(&mut first, &silent(), &RunOptions::default()).unwrap();
    let b = run_batch(&mut second, &silent(), &RunOptions::default()).unwrap();

    assert_eq!(a, b);
    assert_eq!(first.dataset(), second.dataset());
    assert_eq!(
        a.correlation.to_bits(),
        correlation(&generate_seeded(&params, DEFAULT_SEED)).unwrap().to_bits()
    );
}

#[test]
fn reference_configuration_matches_golden_value() {
    let params = Params::default();
    let dataset = generate_seeded(&params, DEFAULT_SEED);
    assert_eq!(
        (dataset.x()[0].to_bits(), dataset.y()[0].to_bits()),
        REFERENCE_FIRST_POINT_BITS
    );

    let mut nb = Notebook::new(params, DEFAULT_SEED);
    let report = run_batch(&mut nb, &silent(), &RunOptions::default()).unwrap();
    assert_eq!(report.correlation.to_bits(), REFERENCE_R_BITS);
    assert_eq!(format!("{:.3}", report.correlation), "0.959");
}

#[test]
fn report_serializes_with_all_fields() {
    let mut nb = Notebook::with_defaults();
    let report = run_batch(&mut nb, &silent(), &RunOptions::default()).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["params"]["n"], 200);
    assert_eq!(json["params"]["slope"], 2.0);
    assert_eq!(json["params"]["noise"], 1.0);
    assert_eq!(json["samples"], 200);
    assert!(json["summary"].as_str().unwrap().starts_with("### Current settings"));
    assert_eq!(json["preview"][0]["index"], 0);
}

#[test]
fn csv_matches_notebook_dataset() {
    let mut nb = Notebook::new(Params::new(50, -1.5, 0.4).unwrap(), 9);
    nb.evaluate();
    let dataset = nb.dataset().unwrap();

    let mut buf = Vec::new();
    write_csv(&mut buf, dataset).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let rows: Vec<(f64, f64)> = text
        .lines()
        .skip(1)
        .map(|line| {
            let (x, y) = line.split_once(',').unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect();

    assert_eq!(rows.len(), 50);
    for (i, (x, y)) in rows.iter().enumerate() {
        assert_eq!(x.to_bits(), dataset.x()[i].to_bits());
        assert_eq!(y.to_bits(), dataset.y()[i].to_bits());
    }
}

#[test]
fn svg_of_notebook_plot_has_every_point() {
    let mut nb = Notebook::new(Params::new(100, 2.0, 1.0).unwrap(), 3);
    nb.evaluate();
    let svg = render_svg_string(nb.plot().unwrap()).unwrap();
    assert_eq!(svg.matches("<circle").count(), 100);
}

#[test]
fn interactive_edits_match_fresh_batch_runs() {
    let mut live = Notebook::with_defaults();
    live.evaluate();
    live.step_param(ParamId::Slope, true);
    live.step_param(ParamId::Noise, true);
    live.set_seed(11);
    let recomputed = live.evaluate();
    assert_eq!(recomputed.first(), Some(&CellId::Seed));

    let mut fresh = Notebook::new(live.params(), 11);
    let report = run_batch(&mut fresh, &silent(), &RunOptions::default()).unwrap();
    assert_eq!(
        live.correlation().unwrap().unwrap().to_bits(),
        report.correlation.to_bits()
    );
    assert_eq!(live.summary().unwrap(), report.summary);
}

#[test]
fn sweep_weakens_correlation_as_noise_grows() {
    let config = SweepConfig::from_params(&Params::default(), 8, DEFAULT_SEED);
    let result = run_sweep(&config, &CancellationToken::new(), &NullProgressReporter).unwrap();

    assert_eq!(result.points.len(), 26);
    assert!(result.is_non_increasing(1e-9));
    let first = result.points[0].mean_abs_r.unwrap();
    let last = result.points[25].mean_abs_r.unwrap();
    assert!((first - 1.0).abs() < 1e-12);
    assert!(last < 0.8);
}

#[test]
fn sweep_mean_matches_single_runs() {
    let params = Params::new(200, 2.0, 2.0).unwrap();
    let config = SweepConfig {
        noise_levels: vec![2.0],
        ..SweepConfig::from_params(&params, 4, 100)
    };
    let result = run_sweep(&config, &CancellationToken::new(), &NullProgressReporter).unwrap();

    let expected: f64 = (0..4)
        .map(|t| correlation(&generate_seeded(&params, 100 + t)).unwrap().abs())
        .sum::<f64>()
        / 4.0;
    assert!((result.points[0].mean_abs_r.unwrap() - expected).abs() < 1e-12);
}
