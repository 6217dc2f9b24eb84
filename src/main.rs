#[macro_use] extern crate prettytable;

use structopt::StructOpt;

mod cli;
mod interface;
mod model;

use cli::CommandLineArgs;
use model::Schedule;

fn main() -> anyhow::Result<()> {
    // Get the command-line arguments.
    let CommandLineArgs { wrap } = CommandLineArgs::from_args();

    // The schedule lives for the run and is handed to the shell.
    let mut schedule = Schedule::new();
    interface::run_shell(&mut schedule, wrap)
}
