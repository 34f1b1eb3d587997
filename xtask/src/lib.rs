//! Workspace automation commands (`cargo xtask`).
//!
//! A small CLI layer over shared runtime services. Command modules own their option parsing and
//! policy; [`runtime`] owns the command context, filesystem helpers, and error type.

pub mod cli;
pub mod commands;
pub mod layout;
pub mod runtime;

use crate::cli::TopLevelCommand;
use crate::commands::layout::LayoutCommand;
use crate::runtime::context::CommandContext;
use crate::runtime::error::XtaskResult;

/// Shared command contract for top-level xtask command families.
///
/// [`XtaskCommand::parse`] is a pure translation from raw CLI arguments into typed options;
/// side effects belong in [`XtaskCommand::run`].
pub trait XtaskCommand {
    /// Typed options produced by CLI parsing for the command family.
    type Options;

    /// Parse command-line arguments into typed options.
    ///
    /// Implementations should return
    /// [`XtaskError::validation`](crate::runtime::error::XtaskError::validation) for invalid
    /// argument shapes.
    fn parse(args: &[String]) -> XtaskResult<Self::Options>;

    /// Execute the command family using the shared runtime context.
    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()>;
}

/// Executes the `xtask` binary using the current process arguments.
pub fn execute_from_env() -> XtaskResult<()> {
    execute(std::env::args().skip(1).collect())
}

/// Parses `args` and runs the selected command with a fresh [`CommandContext`].
pub fn execute(args: Vec<String>) -> XtaskResult<()> {
    match cli::parse(args)? {
        TopLevelCommand::Layout(args) => {
            let options = LayoutCommand::parse(&args)?;
            LayoutCommand::run(&CommandContext::new()?, options)
        }
        TopLevelCommand::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Converts an xtask result into a stable process exit code.
///
/// All command failures map to exit code `1` after printing the formatted
/// [`XtaskError`](crate::runtime::error::XtaskError) to stderr.
pub fn exit_code(result: XtaskResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(1)
        }
    }
}
