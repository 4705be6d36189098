use clap::Parser;
use interest_calc::{app::interactive, CliArgs, CompoundInterest};

#[derive(Parser)]
#[command(name = "compound-interest")]
#[command(about = "Reads principal, time and rate from stdin and prints P*(1+R/100)^T")]
struct Args {
    #[command(flatten)]
    common: CliArgs,
}

fn main() {
    let args = Args::parse();
    std::process::exit(interactive::run(CompoundInterest, &args.common));
}
