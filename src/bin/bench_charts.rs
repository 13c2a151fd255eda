use bench_charts::api::{ChartPageConfig, ChartPipeline, ChartSlot, DirectorySource};
use bench_charts::render::JsonFileRenderer;
use bench_charts::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: bench_charts --chart <id>[=<title>] [--chart ...] --out <dir> [--data-dir <dir>] [--config <path>]";

#[derive(Debug)]
struct CliArgs {
    charts: Vec<ChartSlot>,
    out_dir: PathBuf,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartPageConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartPageConfig::default(),
    };
    if let Some(data_dir) = args.data_dir {
        config = config.with_data_dir(data_dir);
    }

    fs::create_dir_all(&args.out_dir)
        .map_err(|err| format!("failed to create `{}`: {err}", args.out_dir.display()))?;

    let source = DirectorySource::new(config.data_dir.clone());
    let renderer = JsonFileRenderer::new(args.out_dir.clone());
    let mut pipeline =
        ChartPipeline::new(source, renderer, config).map_err(|err| err.to_string())?;
    let report = pipeline.run_page(&args.charts);

    for chart in report.rendered() {
        let path = args.out_dir.join(format!("{}.links.html", chart.chart_id));
        fs::write(&path, chart.links.to_html())
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
        println!(
            "rendered {} ({} series, {} source links)",
            chart.chart_id,
            chart.series.len(),
            chart.links.links.len()
        );
    }
    for (chart_id, error) in report.failures() {
        println!("failed {chart_id}: {error}");
    }

    if report.rendered_count() == 0 {
        return Err(format!("none of {} charts rendered", report.outcomes.len()));
    }
    Ok(())
}

fn parse_chart(value: &str) -> Result<ChartSlot, String> {
    let (id, title) = match value.split_once('=') {
        Some((id, title)) => (id, title),
        None => (value, value),
    };
    if id.is_empty() {
        return Err(format!("empty chart id in `{value}`"));
    }
    Ok(ChartSlot::new(id, title))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut charts = Vec::new();
    let mut out_dir = None::<PathBuf>;
    let mut data_dir = None::<PathBuf>;
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--chart" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --chart".to_owned())?;
                charts.push(parse_chart(&value)?);
            }
            "--out" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out".to_owned())?;
                out_dir = Some(PathBuf::from(value));
            }
            "--data-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data-dir".to_owned())?;
                data_dir = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    if charts.is_empty() {
        return Err(format!("at least one --chart is required\n{USAGE}"));
    }
    let out_dir = out_dir.ok_or_else(|| format!("missing --out\n{USAGE}"))?;
    Ok(CliArgs {
        charts,
        out_dir,
        data_dir,
        config,
    })
}
