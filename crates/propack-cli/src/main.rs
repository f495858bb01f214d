use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use propack_core::{CategorySet, PackError, Packer, Result};

mod args;
use args::{Cli, Commands, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        handle_completions(*shell);
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let root = root
        .canonicalize()
        .map_err(|_| PackError::RootNotFound { path: root })?;

    let packer = Packer::new(root.clone(), CategorySet::builtin());

    let verbose = cli.verbose;
    let on_file = |tag: &str, detail: &str| match tag {
        "CREATE" => println!("{} {}", "Created:".green(), detail),
        "SKIP" => eprintln!("{} skipped {}", "[WARN]".yellow().bold(), detail),
        "PACK" if verbose => println!("  {} {}", "packed".dimmed(), detail),
        _ => {}
    };

    println!("Packing {}", root.display().to_string().cyan());
    println!();

    let report = packer.run(Some(&on_file))?;

    println!();
    println!(
        "{} {} files into {} artifacts{}",
        "Packed:".green().bold(),
        report.packed,
        report.artifacts.len(),
        if report.skipped > 0 {
            format!(" ({} skipped)", report.skipped)
        } else {
            String::new()
        }
    );

    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "propack", &mut io::stdout());
}
