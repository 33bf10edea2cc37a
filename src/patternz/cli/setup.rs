use clap::{Parser, Subcommand};
use patternz::vehicles::VehicleKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patternz", bin_name = "patternz", version)]
#[command(about = "Bridge and Builder pattern demos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Exit without waiting for a keypress
    #[arg(long, global = true)]
    pub no_wait: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the sample customer list (Bridge)
    #[command(alias = "c")]
    Customers {
        /// Group label for the show-all block
        #[arg(long)]
        group: Option<String>,
    },

    /// Assemble vehicles in the shop (Builder)
    #[command(alias = "v")]
    Vehicles {
        /// Vehicles to assemble, in order (scooter, motorcycle, car, bus)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        only: Vec<VehicleKind>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (group, pause, vehicles)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
