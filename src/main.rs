use clap::Parser;
use tracing_subscriber::EnvFilter;
use vaultguard::cli::commands::update::UpdateArgs;
use vaultguard::cli::{Cli, Commands};

fn main() {
    // Diagnostics go to stderr so stdout stays clean for keys and secrets.
    let filter = EnvFilter::try_from_env("VAULTGUARD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Keygen => vaultguard::cli::commands::keygen::execute(),
        Commands::Store {
            ref service,
            ref username,
            ref secret,
            ref category,
        } => vaultguard::cli::commands::store::execute(
            &cli,
            service,
            username,
            secret.as_deref(),
            category.as_deref(),
        ),
        Commands::List => vaultguard::cli::commands::list::execute(&cli),
        Commands::Reveal { ref id } => vaultguard::cli::commands::reveal::execute(&cli, id),
        Commands::Update {
            ref id,
            ref service,
            ref username,
            ref category,
            clear_category,
            rotate,
        } => {
            let args = UpdateArgs {
                service: service.as_deref(),
                username: username.as_deref(),
                category: category.as_deref(),
                clear_category,
                rotate,
            };
            vaultguard::cli::commands::update::execute(&cli, id, &args)
        }
        Commands::Delete { ref id, force } => {
            vaultguard::cli::commands::delete::execute(&cli, id, force)
        }
        Commands::Breach { ref password } => {
            vaultguard::cli::commands::breach::execute(password.as_deref())
        }
        Commands::Score { json } => vaultguard::cli::commands::score::execute(&cli, json),
        Commands::Strength { ref password } => {
            vaultguard::cli::commands::strength::execute(&cli, password.as_deref())
        }
        Commands::Generate {
            length,
            no_uppercase,
            no_digits,
            no_special,
        } => vaultguard::cli::commands::generate::execute(
            length,
            !no_uppercase,
            !no_digits,
            !no_special,
        ),
    };

    if let Err(e) = result {
        vaultguard::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
