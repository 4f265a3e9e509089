use argh::FromArgs;

use self::{build::BuildTask, format::FormatTask, lint::LintTask, test::TestTask};

mod build;
mod format;
mod lint;

/// Tasks
#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub(crate) enum Tasks {
    Build(BuildTask),
    Format(FormatTask),
    Lint(LintTask),
    Test(TestTask),
}
