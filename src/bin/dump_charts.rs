use anyhow::{Context, Result};
use battery_visualizer::{ChartKind, ChartViewModel, SeriesSummary};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};

/// Print the chart data behind the GUI as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Attach descriptive statistics to every series
    #[arg(long, default_value_t = false)]
    summary: bool,
}

#[derive(Serialize)]
struct ChartDump<'a> {
    kind: ChartKind,
    title: String,
    x_axes: Vec<&'a str>,
    y_axes: Vec<&'a str>,
    series: Vec<SeriesDump<'a>>,
}

#[derive(Serialize)]
struct SeriesDump<'a> {
    name: &'a str,
    points: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SeriesSummary>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let vm = ChartViewModel::new();

    let charts: Vec<ChartDump> = vm
        .charts()
        .map(|(kind, chart)| ChartDump {
            kind,
            title: kind.to_string(),
            x_axes: chart.x_axes.iter().map(|a| a.name()).collect(),
            y_axes: chart.y_axes.iter().map(|a| a.name()).collect(),
            series: chart
                .series
                .iter()
                .map(|s| SeriesDump {
                    name: s.name(),
                    points: s.points(),
                    summary: if args.summary {
                        SeriesSummary::from_series(s)
                    } else {
                        None
                    },
                })
                .collect(),
        })
        .collect();

    log::info!("Dumping {} charts", charts.len());

    let json = serde_json::to_string_pretty(&charts).context("Failed to serialize chart data")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write chart data to stdout")?;
    Ok(())
}
