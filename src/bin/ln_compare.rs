// Compares the Taylor-series logarithm with the platform `ln`, first point by
// point over an arithmetic sweep and then as a timing loop over the same
// sequence.

use std::hint::black_box;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use taylorln::{DEFAULT_SERIES, TaylorLn, Variant};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scale {
    /// Significand times 2/3
    TwoThirds,
    /// Significand times √2/2
    FracSqrt2,
}

impl From<Scale> for Variant {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::TwoThirds => Variant::TwoThirds,
            Scale::FracSqrt2 => Variant::FracSqrt2,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare the Taylor-series ln with the platform logarithm")]
struct Args {
    /// Number of points in the precision sweep
    #[arg(long, default_value_t = 64)]
    count: usize,
    /// First x of the sweep and of the timing loop
    #[arg(long, default_value_t = 1.0)]
    start: f64,
    /// Distance between consecutive x
    #[arg(long, default_value_t = 0.5)]
    step: f64,
    /// Series terms
    #[arg(long, default_value_t = DEFAULT_SERIES)]
    series: u32,
    /// Significand scale
    #[arg(long, value_enum, default_value_t = Scale::TwoThirds)]
    variant: Scale,
    /// Square roots taken before the series (preset default when omitted)
    #[arg(long)]
    root_depth: Option<u32>,
    /// Calls per implementation in the timing loop; 0 skips it
    #[arg(long, default_value_t = 1_000_000)]
    timing_count: usize,
}

impl Args {
    fn engine(&self) -> TaylorLn {
        let engine = TaylorLn::new(Variant::from(self.variant).reduction()).with_series(self.series);
        match self.root_depth {
            Some(depth) => engine.with_root_depth(depth),
            None => engine,
        }
    }
}

fn precision_compare(engine: &TaylorLn, args: &Args) -> anyhow::Result<()> {
    let mut max_dev = 0.0f64;
    let mut max_x = args.start;
    let mut x = args.start;
    for _ in 0..args.count {
        let mine = engine.ln(x).with_context(|| format!("sweep reached x = {x}"))?;
        let platform = x.ln();
        let dev = platform - mine;
        println!("X: {x:<14.12};\tTaylor: {mine:<16.12};\tPlatform: {platform:<16.12};\tDeviation: {dev:.12e}");
        if dev.abs() > max_dev {
            max_dev = dev.abs();
            max_x = x;
        }
        x += args.step;
    }
    info!("max deviation {max_dev:e} at x = {max_x}");
    Ok(())
}

fn time_loop<F>(count: usize, start: f64, step: f64, f: F) -> u128
where
    F: Fn(f64) -> f64,
{
    let begin = Instant::now();
    let mut x = start;
    let mut acc = 0.0;
    for _ in 0..count {
        acc += f(black_box(x));
        x += step;
    }
    black_box(acc);
    begin.elapsed().as_millis()
}

fn performance_compare(engine: &TaylorLn, args: &Args) -> anyhow::Result<()> {
    let last = args.start + args.step * args.timing_count.saturating_sub(1) as f64;
    if args.start <= 0.0 || last <= 0.0 {
        anyhow::bail!("timing loop would leave the domain: x runs from {} to {last}", args.start);
    }

    let platform_ms = time_loop(args.timing_count, args.start, args.step, f64::ln);
    println!("[PLATFORM][{}]: {platform_ms}msec", args.timing_count);
    let taylor_ms = time_loop(args.timing_count, args.start, args.step, |x| {
        engine.ln(x).unwrap_or(f64::NAN)
    });
    println!("[TAYLOR][{}]: {taylor_ms}msec", args.timing_count);

    info!(
        "timed {} calls: platform {platform_ms} ms, taylor {taylor_ms} ms",
        args.timing_count
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let engine = args.engine();
    info!(
        "comparing {:?} with {} series terms",
        engine.reduction(),
        engine.series()
    );

    precision_compare(&engine, &args)?;
    if args.timing_count > 0 {
        performance_compare(&engine, &args)?;
    }
    Ok(())
}
