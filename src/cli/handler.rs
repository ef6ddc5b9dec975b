use super::error;
use super::output;
use super::{Commands, SchemaArgs};
use crate::apply::{Action, Apply};
use std::io::Write;

/// Handle a CLI command and return exit code.
///
/// The success message goes to `out`. On failure only the error text goes to `err`,
/// and nothing is written to `out`.
pub async fn handle_command<A, O, E>(
    command: Commands,
    applier: &A,
    out: &mut O,
    err: &mut E,
) -> i32
where
    A: Apply,
    O: Write,
    E: Write,
{
    let (action, args) = match &command {
        Commands::Validate(args) => (Action::Validate, args),
        Commands::Apply(args) => (Action::Apply, args),
    };

    handle_schema_action(action, args, applier, out, err).await
}

/// Run one schema action through the collaborator and report the outcome
async fn handle_schema_action<A, O, E>(
    action: Action,
    args: &SchemaArgs,
    applier: &A,
    out: &mut O,
    err: &mut E,
) -> i32
where
    A: Apply,
    O: Write,
    E: Write,
{
    tracing::debug!("Running {} for {:?} (host: {:?})", action, args.path, args.host);

    match applier.apply(action, &args.path, args.url()).await {
        Ok(()) => {
            tracing::info!("{} succeeded for {:?}", action, args.path);
            let written = writeln!(out, "{}", output::success_message(action))
                .and_then(|_| out.flush());
            match written {
                Ok(()) => error::SUCCESS,
                Err(e) => {
                    tracing::warn!("Failed to write success message: {}", e);
                    error::ERROR
                }
            }
        }
        Err(e) => {
            tracing::warn!("{} failed for {:?}: {:?}", action, args.path, e);
            if let Err(write_err) = writeln!(err, "{}", e).and_then(|_| err.flush()) {
                tracing::warn!("Failed to write error message: {}", write_err);
            }
            error::ERROR
        }
    }
}
