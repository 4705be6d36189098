use clap::Parser;
use interest_calc::{app::interactive, CliArgs, SimpleInterest};

#[derive(Parser)]
#[command(name = "simple-interest")]
#[command(about = "Reads principal, rate and time from stdin and prints P*R*T/100")]
struct Args {
    #[command(flatten)]
    common: CliArgs,
}

fn main() {
    let args = Args::parse();
    std::process::exit(interactive::run(SimpleInterest, &args.common));
}
