use clap::{Parser, Subcommand};
use interest_calc::{app::interactive, CliArgs, CompoundInterest, SimpleInterest};

#[derive(Parser)]
#[command(name = "interest-calc")]
#[command(about = "Simple and compound interest calculators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prompt for principal, rate and time; print the simple interest
    Simple {
        #[command(flatten)]
        common: CliArgs,
    },
    /// Prompt for principal, time and rate; print the compounded amount
    Compound {
        #[command(flatten)]
        common: CliArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Simple { common } => interactive::run(SimpleInterest, &common),
        Command::Compound { common } => interactive::run(CompoundInterest, &common),
    };

    std::process::exit(exit_code);
}
