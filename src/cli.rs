use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "dayplan", about = "A minimalistic daily task scheduler.")]
pub struct CommandLineArgs {
    /// Wrap task descriptions at this many columns in the task table.
    #[structopt(short, long, default_value = "40")]
    pub wrap: usize,
}
