// CLI module for oggwave
//
// Inspects Ogg Vorbis files the same way the sound wave loader does. Only
// compiled into the binary.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{Commands, Config};
pub use output::{OutputFormat, OutputFormatter};

// Error type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    NoFiles,
    Failed { failed: usize, total: usize },
    Pattern(String),
    IoError(std::io::Error),
    Load(oggwave::LoadError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NoFiles => write!(f, "No files specified"),
            CliError::Failed { failed, total } => write!(f, "{} of {} files failed", failed, total),
            CliError::Pattern(msg) => write!(f, "Invalid glob pattern: {}", msg),
            CliError::IoError(e) => write!(f, "I/O error: {}", e),
            CliError::Load(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::IoError(e) => Some(e),
            CliError::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::IoError(e)
    }
}

impl From<oggwave::LoadError> for CliError {
    fn from(e: oggwave::LoadError) -> Self {
        CliError::Load(e)
    }
}

/// Run the selected subcommand
pub fn run(config: &Config) -> anyhow::Result<()> {
    let formatter = OutputFormatter::new(config.format.clone(), config.quiet);
    let mut stdout = std::io::stdout().lock();

    match &config.command {
        Commands::Info { files } => commands::command_info(files, &formatter, &mut stdout)?,
        Commands::Detect { files } => commands::command_detect(files, &formatter, &mut stdout)?,
        Commands::Scan { directory, pattern } => {
            commands::command_scan(directory, pattern, &formatter, &mut stdout)?
        }
        Commands::Export { file, output } => commands::command_export(file, output, &formatter)?,
    }
    Ok(())
}
