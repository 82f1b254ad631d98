mod args;
mod commands;

use args::{GlobalArgs, LoggingFormat};
use clap::{Parser, Subcommand};
use wallet_scanner_lib::{Config, Localizer, ScannerError};

#[derive(Subcommand)]
enum Commands {
    /// Scan a wallet and show balance, tokens, NFTs and reclaimable SOL
    Scan {
        /// Address to scan; refused when --keypair connects a wallet
        address: Option<String>,

        /// Keypair to connect as the wallet (file path, base58 or byte array)
        #[arg(long)]
        keypair: Option<String>,
    },
    /// Close the empty token accounts of the keypair's wallet
    Recover {
        /// Keypair to connect as the wallet (file path, base58 or byte array)
        #[arg(long, env = "WALLET_PRIVATE_KEY", hide_env_values = true)]
        keypair: String,

        /// Sign and broadcast the close transaction (default is dry-run)
        #[arg(long, default_value_t = false)]
        execute: bool,
    },
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration after flags and environment
    Show,
}

#[derive(Parser)]
#[command(author, version, about = "Solana wallet scanner and rent recovery client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[tokio::main]
async fn main() -> Result<(), ScannerError> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    setup_logging(&cli.global_args.logging_format);

    let mut config = Config::load_or_default(&cli.global_args.config).unwrap_or_else(|e| {
        print_error(&format!("Failed to load config: {e}"));
        std::process::exit(1);
    });
    cli.global_args.apply_to(&mut config);
    if let Err(e) = config.validate() {
        print_error(&format!("Invalid configuration: {e}"));
        std::process::exit(1);
    }

    let mut stdout = std::io::stdout();
    let result = match cli.command {
        Some(Commands::Scan { address, keypair }) => {
            commands::handle_scan(&config, address, keypair, &mut stdout).await
        }
        Some(Commands::Recover { keypair, execute }) => {
            commands::handle_recover(&config, &keypair, execute, &mut stdout).await
        }
        Some(Commands::Config { config_command }) => match config_command {
            ConfigCommands::Show => commands::handle_config_show(&config, &mut stdout),
        },
        None => {
            println!("No command specified. Use --help for usage information.");
            println!("Available commands:");
            println!("  scan [ADDRESS]  - Scan a wallet");
            println!("  recover         - Recover rent from empty token accounts");
            println!("  config show     - Show the effective configuration");
            Ok(())
        }
    };

    if let Err(e) = result {
        log::debug!("Command failed: {e}");
        print_error(&Localizer::new(config.ui.language).error_message(&e));
        std::process::exit(1);
    }

    Ok(())
}

fn print_error(message: &str) {
    eprintln!("Error: {message}");
}

fn setup_logging(format: &LoggingFormat) {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "warn,wallet_scanner_lib=info,wallet_scanner=info".into());

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr);
    match format {
        LoggingFormat::Standard => subscriber.init(),
        LoggingFormat::Json => subscriber.json().init(),
    }
}
