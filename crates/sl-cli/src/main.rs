//! CLI frontend for SecureLogin, the password recovery nobody asked for.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "securelogin",
    about = "SecureLogin: extremely secure password recovery",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP recovery service
    Serve {
        /// Interface to bind (default: SECURELOGIN_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default: SECURELOGIN_PORT or 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Pick the lineup from the question pool with this seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Seed for witty responses
        #[arg(long)]
        quip_seed: Option<u64>,
    },

    /// Print the active question lineup
    Questions {
        /// Pick the lineup from the question pool with this seed
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Walk through password recovery in the terminal
    Play {
        /// Pick the lineup from the question pool with this seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Seed for witty responses
        #[arg(long)]
        quip_seed: Option<u64>,

        /// Skip the dramatic pauses
        #[arg(short, long)]
        fast: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            seed,
            quip_seed,
        } => commands::serve::run(host, port, seed, quip_seed),
        Commands::Questions { seed } => commands::questions::run(seed),
        Commands::Play {
            seed,
            quip_seed,
            fast,
        } => commands::play::run(seed, quip_seed, fast),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
