use clap::Parser;

/// Collects connpass events over a month range into a CSV dataset.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// First month to collect, as YYYYMM
    #[arg(short, long, default_value_t = 201901)]
    pub start: u32,

    /// Last month to collect (inclusive), as YYYYMM
    #[arg(short, long, default_value_t = 201905)]
    pub end: u32,
}
