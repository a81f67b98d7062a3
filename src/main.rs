use chronicles::build_info;
use chronicles::{create_character, CharacterManager, GameError, SaveConfig};
use env_logger::Env;
use std::process;
use thiserror::Error;

const HELP: &str = "Chronicles - character save manager

Usage:
  chronicles list                    List saved characters
  chronicles create <name> <class>   Create and save a new character
                                     (Warrior, Mage, Rogue, Cleric)
  chronicles show <name>             Print a saved character as JSON
  chronicles delete <name>           Delete a saved character
  chronicles --version               Show version information
  chronicles --help                  Show this help

Saves are stored in $CHRONICLES_SAVE_DIR or the platform data directory.";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("could not format {name}: {source}")]
    Format {
        name: String,
        source: serde_json::Error,
    },

    #[error("unrecognized arguments\n\n{}", HELP)]
    Usage,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    List,
    Create { name: String, class: String },
    Show { name: String },
    Delete { name: String },
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = parse_args(&args).and_then(run) {
        eprintln!("chronicles: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["--help"] | ["-h"] => Ok(Command::Help),
        ["--version"] | ["-v"] => Ok(Command::Version),
        ["list"] => Ok(Command::List),
        ["create", name, class] => Ok(Command::Create {
            name: name.to_string(),
            class: class.to_string(),
        }),
        ["show", name] => Ok(Command::Show {
            name: name.to_string(),
        }),
        ["delete", name] => Ok(Command::Delete {
            name: name.to_string(),
        }),
        _ => Err(CliError::Usage),
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Help => {
            println!("{}", HELP);
            return Ok(());
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        _ => {}
    }

    let manager = CharacterManager::new(&SaveConfig::from_env()?);

    match command {
        Command::List => {
            for name in manager.list_characters()? {
                println!("{}", name);
            }
        }
        Command::Create { name, class } => {
            if manager.character_exists(&name) {
                return Err(CliError::AlreadyExists(name));
            }
            let record = create_character(&name, &class)?;
            let path = manager.save_character(&record)?;
            println!("Created {} the {} ({})", record.name, record.class, path.display());
        }
        Command::Show { name } => {
            let record = manager.load_character(&name)?;
            let json = serde_json::to_string_pretty(&record)
                .map_err(|source| CliError::Format { name, source })?;
            println!("{}", json);
        }
        Command::Delete { name } => {
            manager.delete_character(&name)?;
            println!("Deleted {}", name);
        }
        Command::Help | Command::Version => {}
    }

    Ok(())
}
