use std::{io, path::PathBuf};

use clap::Parser;
use color_eyre as ey;
use ey::eyre::Context;
use imgres::Options;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArguments {
    /// Root directory that is scanned for image resources
    #[arg(short, long)]
    dir: PathBuf,

    /// Path of the generated source file
    #[arg(short, long)]
    out: PathBuf,

    /// Prefix used when computing relative resource paths, relative to the
    /// output file's directory
    #[arg(short, long)]
    read: Option<PathBuf>,

    /// Emit typed declarations and the matching type import
    #[arg(long)]
    ts: bool,
}

fn main() -> ey::Result<()> {
    // Setup logging
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(io::stdout())
        .apply()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let command_line_arguments = CommandLineArguments::parse();
    info!("Started searching resources in {:?}", command_line_arguments.dir);

    let options = Options {
        dir: command_line_arguments.dir,
        out: command_line_arguments.out,
        read: command_line_arguments.read,
        typescript: command_line_arguments.ts,
    };
    imgres::generate(&options).wrap_err("Failed to generate the resource accessors")?;

    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::CommandLineArguments;

    #[test]
    fn missing_required_options_are_rejected() {
        assert!(CommandLineArguments::try_parse_from(["imgres_tool", "--out", "resources.ts"]).is_err());
        assert!(CommandLineArguments::try_parse_from(["imgres_tool", "--dir", "assets"]).is_err());
    }

    #[test]
    fn full_invocation_parses() {
        let arguments = CommandLineArguments::try_parse_from([
            "imgres_tool",
            "--dir",
            "assets",
            "--out",
            "src/resources.ts",
            "--read",
            "../assets",
            "--ts",
        ])
        .unwrap();
        assert_eq!(arguments.dir, std::path::PathBuf::from("assets"));
        assert!(arguments.ts);
        assert_eq!(arguments.read, Some(std::path::PathBuf::from("../assets")));
    }
}
