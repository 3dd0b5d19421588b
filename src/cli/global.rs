use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Backend base URL (overrides config and CONVERSORS_API_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Backend API key (overrides config and CONVERSORS_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Copy the output to the system clipboard
    #[arg(short = 'c', long, global = true)]
    pub copy: bool,

    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "10485760")]
    pub max_size: usize,

    /// Process inputs exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}

impl GlobalArgs {
    /// Log filter used when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}
