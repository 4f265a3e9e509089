use std::{path::Path, str::FromStr};

use argh::FromArgs;

use crate::common::project_root;

const BINARY_NAME: &str = "classroom";

/// Supported cross-compilation targets.
const TARGETS: [&str; 5] = [
    "x86_64-unknown-linux-gnu",
    "aarch64-unknown-linux-gnu",
    "x86_64-pc-windows-msvc",
    "x86_64-apple-darwin",
    "aarch64-apple-darwin",
];

#[derive(Debug, PartialEq, Eq)]
struct Targets(Vec<String>);

impl FromStr for Targets {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self(TARGETS.iter().map(|t| t.to_string()).collect()));
        }

        value
            .split(',')
            .map(|target| {
                if TARGETS.contains(&target) {
                    Ok(target.to_string())
                } else {
                    Err(format!(
                        "unknown target '{}', possible values are: {}, or all",
                        target,
                        TARGETS.join(", ")
                    ))
                }
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

/// build release binaries
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "build")]
pub(crate) struct BuildTask {
    /// comma-separated targets, or `all` (defaults to host)
    #[argh(option)]
    targets: Option<Targets>,

    /// output directory, emptied first
    #[argh(option, default = "String::from(\"dist\")")]
    output_dir: String,
}

impl BuildTask {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        let root = project_root();
        let output_dir = root.join(&self.output_dir);
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir)?;
        }
        std::fs::create_dir_all(&output_dir)?;

        match self.targets {
            Some(Targets(targets)) => {
                for target in targets {
                    println!("Compiling {} for {}...", BINARY_NAME, target);
                    duct::cmd!(
                        "cargo",
                        "build",
                        "--release",
                        "--bin",
                        BINARY_NAME,
                        "--target",
                        &target
                    )
                    .dir(&root)
                    .run()?;

                    let release_dir = root.join("target").join(&target).join("release");
                    copy_binary(&release_dir, &output_dir, Some(&target))?;
                }
            }
            None => {
                println!("Compiling {} for host...", BINARY_NAME);
                duct::cmd!("cargo", "build", "--release", "--bin", BINARY_NAME)
                    .dir(&root)
                    .run()?;

                copy_binary(&root.join("target").join("release"), &output_dir, None)?;
            }
        }

        Ok(())
    }
}

fn copy_binary(
    release_dir: &Path,
    output_dir: &Path,
    target: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let windows = target.map(|t| t.contains("windows")).unwrap_or(cfg!(windows));
    let extension = if windows { ".exe" } else { "" };

    let source = release_dir.join(format!("{BINARY_NAME}{extension}"));
    let destination = match target {
        Some(target) => output_dir.join(format!("{BINARY_NAME}.{target}{extension}")),
        None => output_dir.join(format!("{BINARY_NAME}{extension}")),
    };

    std::fs::copy(source, destination)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_targets() {
        assert_eq!(
            Targets::from_str("x86_64-apple-darwin").unwrap(),
            Targets(vec!["x86_64-apple-darwin".into()])
        );
        assert_eq!(Targets::from_str("all").unwrap().0.len(), TARGETS.len());
        assert!(Targets::from_str("x86_64-unknown-freebsd").is_err());
    }
}
