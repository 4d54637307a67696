use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the newest postings, loading more in batches")]
    Feed {
        #[arg(long, default_value = "0", help = "Extra batches to load after the first")]
        batches: usize,

        #[arg(long, conflicts_with = "batches", help = "Keep loading until every posting is shown")]
        all: bool,
    },

    #[command(about = "List postings one page at a time")]
    List {
        #[arg(long, default_value = "1")]
        page: usize,
    },

    #[command(about = "Show a single posting by its timestamp identifier")]
    Show {
        #[arg(help = "Posting timestamp (Unix seconds)")]
        timestamp: String,
    },

    #[command(about = "Convert the survey CSV export into published job data")]
    Import {
        #[arg(default_value = "public/job_data.csv")]
        input: PathBuf,

        #[arg(short, long, default_value = "public/job_data.json")]
        output: PathBuf,
    },

    #[command(about = "Drop postings with dead links and follow redirects")]
    CheckLinks {
        #[arg(default_value = "public/job_data.json")]
        input: PathBuf,

        #[arg(short, long, help = "Output file (default: overwrite input)")]
        output: Option<PathBuf>,

        #[arg(long, help = "Report what would change without writing")]
        dry_run: bool,

        #[arg(long, default_value = "10", help = "Request timeout in seconds")]
        timeout: u64,

        #[arg(long, default_value = "500", help = "Pause between requests in milliseconds")]
        pause_ms: u64,
    },

    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a default config.toml to the data directory")]
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },

    #[command(about = "Print the effective configuration")]
    Show,
}
