//! `cargo xtask layout`: writes or checks the responsive layout stylesheet.

use std::path::{Path, PathBuf};

use crate::layout;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::runtime::fs;
use crate::XtaskCommand;

/// `cargo xtask layout ...`
pub struct LayoutCommand;

/// What `cargo xtask layout` should do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LayoutOptions {
    /// Write the stylesheet to `output`.
    Write { output: PathBuf },
    /// Fail unless `output` already holds the current stylesheet.
    Check { output: PathBuf },
    Help,
}

impl XtaskCommand for LayoutCommand {
    type Options = LayoutOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        parse_layout_options(args)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        match options {
            LayoutOptions::Write { output } => {
                fs::write_text(&ctx.resolve(&output), &layout::render())
                    .map_err(|err| err.with_operation("layout"))?;
                println!("Generated {}", output.display());
                Ok(())
            }
            LayoutOptions::Check { output } => {
                check(&ctx.resolve(&output))?;
                println!("{} is up to date", output.display());
                Ok(())
            }
            LayoutOptions::Help => {
                print_layout_usage();
                Ok(())
            }
        }
    }
}

fn parse_layout_options(args: &[String]) -> XtaskResult<LayoutOptions> {
    let mut output = PathBuf::from(layout::DEFAULT_OUTPUT);
    let mut check = false;

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check" => check = true,
            "--output" | "-o" => {
                let value = args.next().ok_or_else(|| {
                    XtaskError::validation(format!("{arg} requires a path"))
                        .with_hint("cargo xtask layout --output <path>")
                })?;
                output = PathBuf::from(value);
            }
            "help" | "--help" | "-h" => return Ok(LayoutOptions::Help),
            other => match other.strip_prefix("--output=") {
                Some(value) if !value.is_empty() => output = PathBuf::from(value),
                _ => {
                    return Err(XtaskError::validation(format!(
                        "unknown layout argument: {other}"
                    )))
                }
            },
        }
    }

    Ok(if check {
        LayoutOptions::Check { output }
    } else {
        LayoutOptions::Write { output }
    })
}

fn check(path: &Path) -> XtaskResult<()> {
    let stale = |message: &str| {
        XtaskError::validation(message)
            .with_operation("layout --check")
            .with_path(path)
            .with_hint("run `cargo xtask layout` to regenerate")
    };
    match fs::read_text_if_exists(path)? {
        None => Err(stale("layout stylesheet is missing")),
        Some(existing) if existing != layout::render() => {
            Err(stale("layout stylesheet is out of date"))
        }
        Some(_) => Ok(()),
    }
}

fn print_layout_usage() {
    eprintln!(
        "Usage: cargo xtask layout [--output <path>] [--check]\n\
         \n\
         Options:\n\
           --output <path>     Output file (default: eg-ui-layout.css in the current directory)\n\
           --check             Verify the file matches the generated stylesheet without writing\n"
    );
}
