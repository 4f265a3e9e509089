use argh::FromArgs;

/// run clippy on the workspace
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "lint")]
pub(crate) struct LintTask {
    /// deny warnings
    #[argh(switch, short = 'e')]
    error: bool,
}

impl LintTask {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut args = vec!["clippy", "--workspace", "--all-targets", "--all-features"];
        if self.error {
            args.extend(["--", "-D", "warnings"]);
        }

        duct::cmd("cargo", args).run()?;
        Ok(())
    }
}
