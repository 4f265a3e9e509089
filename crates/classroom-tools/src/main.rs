//! Entrypoint.

use classroom_tools::{initialize_command_line, subcommand_help, ValidationError};

fn main() {
    if let Err(err) = initialize_command_line() {
        eprintln!("ERROR: {:#}", err);

        if let Some(ValidationError::MissingSettings { command, .. }) =
            err.downcast_ref::<ValidationError>()
        {
            eprintln!();
            eprintln!("{}", subcommand_help(command));
        }

        std::process::exit(1);
    }
}
