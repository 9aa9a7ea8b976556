use colored::Colorize;
use std::path::PathBuf;
use structopt::StructOpt;

use iq_plot::error::IqError;
use iq_plot::plots::{PlotOptions, plot_iq_time_graph};
use iq_plot::recording::{ColumnOrder, IqSeries, LoadOptions};

#[derive(StructOpt, Debug)]
#[structopt(name = "iq-plot", about = "plot I/Q samples from a CSV capture")]
struct Options {
    #[structopt(long, default_value = "usrp_samples.csv")]
    file: PathBuf,
    #[structopt(short = "s", long, default_value = "1e6")]
    sample_rate: f64,
    /// column order in the file: qi or iq
    #[structopt(long, default_value = "qi")]
    order: ColumnOrder,
    /// scale sc16 values to [-1, 1]
    #[structopt(long)]
    normalize: bool,
    #[structopt(short = "o", long, default_value = "plots/iq-time.png")]
    output: PathBuf,
    #[structopt(long, default_value = "1200")]
    width: u32,
    #[structopt(long, default_value = "600")]
    height: u32,
    #[structopt(short = "v", long)]
    verbose: bool,
}

fn run(opt: &Options) -> Result<(), IqError> {
    let load_opts = LoadOptions {
        sample_rate: opt.sample_rate,
        order: opt.order,
        normalize: opt.normalize,
    };
    let series = IqSeries::load_with(&opt.file, &load_opts)?;
    let stats = series.stats();

    println!(
        "num_samples: {} -- {:.1} msec",
        format!("{}", series.len()).yellow(),
        series.duration_sec() * 1000.0,
    );
    println!(
        "I: min={:+.3} max={:+.3} mean={:+.3} -- Q: min={:+.3} max={:+.3} mean={:+.3} -- rms={:.3}",
        stats.i.min, stats.i.max, stats.i.mean, stats.q.min, stats.q.max, stats.q.mean, stats.rms
    );

    let plot_opts = PlotOptions {
        output: opt.output.clone(),
        width: opt.width,
        height: opt.height,
    };
    plot_iq_time_graph(&series, &plot_opts)?;
    println!("plot: {}", plot_opts.output.display().to_string().green());
    Ok(())
}

fn main() {
    let opt = Options::from_args();

    let level = if opt.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!(
        "iq-plot: file: {} sample_rate={} order={} size={}x{}",
        opt.file.display(),
        opt.sample_rate,
        opt.order,
        opt.width,
        opt.height
    );

    if let Err(e) = run(&opt) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}
