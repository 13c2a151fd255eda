use std::collections::HashMap;
use std::fs;

use bench_charts::api::{
    BenchmarkSource, ChartOutcome, ChartPageConfig, ChartPipeline, ChartSlot, DirectorySource,
};
use bench_charts::render::{ChartRenderer, JsonFileRenderer, NullRenderer, RenderTarget};
use bench_charts::{ChartDescriptor, ChartError, ChartResult};

#[derive(Default)]
struct MemorySource {
    payloads: HashMap<String, String>,
}

impl MemorySource {
    fn with(mut self, id: &str, payload: &str) -> Self {
        self.payloads.insert(id.to_owned(), payload.to_owned());
        self
    }
}

impl BenchmarkSource for MemorySource {
    fn fetch(&self, chart_id: &str) -> ChartResult<String> {
        self.payloads
            .get(chart_id)
            .cloned()
            .ok_or_else(|| ChartError::Fetch {
                chart_id: chart_id.to_owned(),
                message: "not found".to_owned(),
            })
    }
}

/// Records every descriptor it receives.
#[derive(Default)]
struct RecordingRenderer {
    rendered: Vec<(RenderTarget, ChartDescriptor)>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, target: &RenderTarget, descriptor: ChartDescriptor) -> ChartResult<()> {
        self.rendered.push((target.clone(), descriptor));
        Ok(())
    }
}

const MASTER: &str = r#"{
    "QuantumOptics.jl-v0_4_1": [{"N": 10, "t": 0.5}, {"N": 100, "t": 4.2}],
    "QuantumOptics.jl-v0_4_1/fft": [{"N": 10, "t": 0.1}],
    "QuTiP-4.2.0": [{"N": 10, "t": 1.5}]
}"#;

#[test]
fn chart_runs_end_to_end() {
    let source = MemorySource::default().with("timeevolution_master", MASTER);
    let mut pipeline =
        ChartPipeline::new(source, RecordingRenderer::default(), ChartPageConfig::default())
            .expect("pipeline");

    let chart = pipeline
        .run_chart(&ChartSlot::new("timeevolution_master", "Master equation"))
        .expect("run chart");
    let series: Vec<&str> = chart.series.iter().map(|s| s.as_str()).collect();
    assert_eq!(series, vec!["QuantumOptics.jl", "QuTiP"]);
    assert_eq!(chart.links.links.len(), 2);

    let renderer = pipeline.into_renderer();
    assert_eq!(renderer.rendered.len(), 1);
    let (target, descriptor) = &renderer.rendered[0];
    assert_eq!(target.chart_id, "timeevolution_master");
    assert_eq!(target.height_px, 180);
    assert_eq!(descriptor.title, "Master equation");
    assert_eq!(descriptor.datasets.len(), 2);
    assert_eq!(descriptor.datasets[0].label, "QO.jl");
}

#[test]
fn failing_charts_do_not_affect_siblings() {
    let source = MemorySource::default()
        .with("good_a", MASTER)
        .with("bad_json", r#"{"QuTiP-4.2.0": [}"#)
        .with("bad_record", r#"{"QuTiP-4.2.0": [{"N": 10}]}"#)
        .with("good_b", r#"{"QuantumOpticsToolbox": [{"N": 1, "t": 2}]}"#);
    let mut pipeline =
        ChartPipeline::new(source, NullRenderer::default(), ChartPageConfig::default())
            .expect("pipeline");

    let report = pipeline.run_page(&[
        ChartSlot::new("good_a", "A"),
        ChartSlot::new("bad_json", "B"),
        ChartSlot::new("missing", "C"),
        ChartSlot::new("bad_record", "D"),
        ChartSlot::new("good_b", "E"),
    ]);

    assert_eq!(report.rendered_count(), 2);
    assert_eq!(report.failed_count(), 3);
    let ids: Vec<&str> = report.outcomes.iter().map(ChartOutcome::chart_id).collect();
    assert_eq!(ids, vec!["good_a", "bad_json", "missing", "bad_record", "good_b"]);

    let failures: Vec<(&str, &ChartError)> = report.failures().collect();
    assert!(matches!(failures[0].1, ChartError::Parse { .. }));
    assert!(matches!(failures[1].1, ChartError::Fetch { .. }));
    assert!(matches!(failures[2].1, ChartError::MalformedRecord { .. }));

    let renderer = pipeline.renderer();
    assert_eq!(renderer.render_count, 2);
    assert_eq!(renderer.last_chart_id.as_deref(), Some("good_b"));
    assert_eq!(renderer.last_dataset_count, 1);
}

#[test]
fn fft_series_is_kept_when_exclusion_disabled() {
    let source = MemorySource::default().with("m", MASTER);
    let config = ChartPageConfig::default().with_exclude_fft(false);
    let mut pipeline =
        ChartPipeline::new(source, RecordingRenderer::default(), config).expect("pipeline");
    let chart = pipeline.run_chart(&ChartSlot::new("m", "m")).expect("run");
    assert_eq!(chart.series.len(), 3);
    assert_eq!(pipeline.renderer().rendered[0].1.datasets[1].label, "QO.jl/fft");
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let config = ChartPageConfig::default().with_canvas_height_px(0);
    let result = ChartPipeline::new(MemorySource::default(), NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn directory_source_reads_chart_payloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("ptrace.json"), MASTER).expect("write payload");
    let source = DirectorySource::new(dir.path());

    assert_eq!(source.fetch("ptrace").expect("fetch"), MASTER);
    assert!(matches!(
        source.fetch("absent"),
        Err(ChartError::Fetch { .. })
    ));
    assert!(matches!(
        source.fetch("../ptrace"),
        Err(ChartError::Fetch { .. })
    ));
}

#[test]
fn json_file_renderer_writes_chart_documents() {
    let data_dir = tempfile::tempdir().expect("data dir");
    let out_dir = tempfile::tempdir().expect("out dir");
    fs::write(data_dir.path().join("ptrace.json"), MASTER).expect("write payload");

    let config = ChartPageConfig::default().with_data_dir(data_dir.path());
    let source = DirectorySource::new(config.data_dir.clone());
    let mut pipeline = ChartPipeline::new(source, JsonFileRenderer::new(out_dir.path()), config)
        .expect("pipeline");
    let report = pipeline.run_page(&[ChartSlot::new("ptrace", "Partial trace")]);
    assert_eq!(report.rendered_count(), 1);

    let renderer = pipeline.into_renderer();
    assert_eq!(renderer.written().len(), 1);
    let raw = fs::read_to_string(renderer.chart_path("ptrace")).expect("read chart");
    let document: serde_json::Value = serde_json::from_str(&raw).expect("chart json");
    assert_eq!(document["id"], "ptrace");
    assert_eq!(document["height"], 180);
    assert_eq!(document["config"]["type"], "line");
    assert_eq!(
        document["config"]["options"]["title"]["text"],
        "Partial trace"
    );
    assert_eq!(
        document["config"]["data"]["datasets"]
            .as_array()
            .expect("datasets")
            .len(),
        2
    );
}

#[test]
fn null_renderer_rejects_non_finite_points() {
    let mut renderer = NullRenderer::default();
    let descriptor = ChartDescriptor {
        title: "nan".to_owned(),
        axis_labels: Default::default(),
        datasets: vec![bench_charts::api::DatasetEntry {
            series: "QuTiP".into(),
            label: "QuTiP".to_owned(),
            points: vec![bench_charts::core::DataPoint::new(1.0, f64::INFINITY)],
            color: None,
            fill_policy: Default::default(),
            line_smoothing: Default::default(),
        }],
    };
    let err = renderer
        .render(&RenderTarget::new("nan", 180), descriptor)
        .expect_err("must reject");
    assert!(matches!(err, ChartError::Render { .. }));
    assert_eq!(renderer.render_count, 0);
}
