use std::path::Path;
use std::sync::Arc;

use person_directory::application::services::{NotificationService, PersonService};
use person_directory::domain::errors::RepositoryError;
use person_directory::domain::traits::{MessageSender, PersonRepository};
use person_directory::infrastructure::adapters::{ConsoleSender, LogSender};
use person_directory::infrastructure::config::{Config, SenderKind, StorageBackend, StorageConfig};
use person_directory::infrastructure::database::SqlitePersonRepository;
use person_directory::infrastructure::storage::InMemoryPersonRepository;
use person_directory::interface::cli::{self, Commands, ExitStatus, PersonCommand, Services};

const UNEXPECTED: &str = "Error: an unexpected error occurred. See logs for details.";

fn main() {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(failure) => {
            failure.print();
            std::process::exit(failure.status.code());
        }
    };

    let status = match cli.command {
        Commands::Version => {
            println!("person-directory v{}", env!("CARGO_PKG_VERSION"));
            ExitStatus::Success
        }
        Commands::InitConfig => init_config(&cli.config),
        Commands::Person(command) => run_command(command, &cli.config, cli.database),
    };

    std::process::exit(status.code());
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn init_config(path: &Path) -> ExitStatus {
    init_logging("warn");

    match Config::write_default(path) {
        Ok(()) => {
            println!("Created default config at {}", path.display());
            ExitStatus::Success
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitStatus::Failure
        }
    }
}

fn run_command(
    command: PersonCommand,
    config_path: &Path,
    database: Option<std::path::PathBuf>,
) -> ExitStatus {
    let config = match Config::load_or_default(config_path, database) {
        Ok(config) => {
            init_logging(&config.logging.level);
            config
        }
        Err(e) => {
            init_logging("warn");
            tracing::error!("Failed to load config: {}", e);
            eprintln!("{}", UNEXPECTED);
            return ExitStatus::Unexpected;
        }
    };

    tracing::debug!("Starting {}", config.app.name);

    let repository = match build_repository(&config.storage) {
        Ok(repository) => repository,
        Err(e) => {
            tracing::error!("Failed to open {:?} store: {}", config.storage.backend, e);
            eprintln!("{}", UNEXPECTED);
            return ExitStatus::Unexpected;
        }
    };
    let sender = build_sender(config.notifications.sender);

    let services = Services {
        people: PersonService::new(repository.clone()),
        notifications: NotificationService::new(repository, sender),
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            eprintln!("{}", UNEXPECTED);
            return ExitStatus::Unexpected;
        }
    };

    match rt.block_on(cli::execute(command, &services)) {
        Ok(output) => {
            println!("{}", output);
            ExitStatus::Success
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            e.exit_status()
        }
    }
}

fn build_repository(storage: &StorageConfig) -> Result<Arc<dyn PersonRepository>, RepositoryError> {
    let repository: Arc<dyn PersonRepository> = match storage.backend {
        StorageBackend::Sqlite => Arc::new(SqlitePersonRepository::open(&storage.path)?),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, records are dropped on exit");
            Arc::new(InMemoryPersonRepository::new())
        }
    };
    Ok(repository)
}

fn build_sender(kind: SenderKind) -> Arc<dyn MessageSender> {
    match kind {
        SenderKind::Console => Arc::new(ConsoleSender::new()),
        SenderKind::Log => Arc::new(LogSender::new()),
    }
}
