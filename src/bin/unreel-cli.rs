use std::{fs, path::PathBuf};

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use unreel::{Animation, SampleOptions, SamplePlan};

const CLI_AFTER_HELP: &str = "Examples:\n  unreel input.gif\n  unreel input.gif --max-frames 60 --progress\n  unreel input.gif --skip 5 --output-dir stills --verbose\n  unreel input.gif --json\n  unreel --completions zsh > _unreel";

#[derive(Debug, Parser)]
#[command(
    name = "unreel",
    version,
    about = "Sample frames from an animated GIF and save each as an annotated PNG still",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Input animated GIF.
    input: Option<PathBuf>,

    /// Maximum number of frames to extract.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    max_frames: u32,

    /// Extract one frame every N source frames (default: computed so the
    /// whole animation fits the --max-frames budget).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    skip: Option<u32>,

    /// Output directory (default: <input>_frames next to the input).
    #[arg(long, value_name = "PATH")]
    output_dir: Option<PathBuf>,

    /// Show a progress bar.
    #[arg(long)]
    progress: bool,

    /// Report each saved frame on stderr.
    #[arg(long)]
    verbose: bool,

    /// Print the summary as machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Generate a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "unreel", &mut std::io::stdout());
        return Ok(());
    }

    let Some(input) = cli.input else {
        Cli::command().print_long_help()?;
        std::process::exit(1);
    };

    let animation = Animation::open(&input)?;
    let total_frames = animation.metadata().frame_count;

    let mut options = SampleOptions::new().with_max_frames(cli.max_frames);
    if let Some(skip) = cli.skip {
        options = options.with_stride(skip);
    }
    if let Some(output_dir) = &cli.output_dir {
        options = options.with_output_dir(output_dir);
    }

    let plan = SamplePlan::resolve(&input, total_frames, &options)?;
    fs::create_dir_all(&plan.output_dir)?;

    if !cli.json {
        println!("GIF: {}", input.display());
        println!("Total frames: {total_frames}");
        println!("Skip: every {} frame(s)", plan.stride);
        println!("Output: {}", plan.output_dir.display());
        println!("---");
    }

    let progress_bar = if cli.progress {
        let pb = ProgressBar::new(u64::from(plan.expected_count(total_frames)));
        let style =
            ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")?;
        pb.set_style(style.progress_chars("##-"));
        Some(pb)
    } else {
        None
    };

    let mut extracted: u32 = 0;
    for result in animation.frames().sampled(&plan)? {
        let frame = result?;
        let output_path = frame.save_into(&plan.output_dir)?;
        extracted += 1;

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }

        if cli.verbose {
            eprintln!(
                "saved frame {} -> {}",
                frame.source_index,
                output_path.display()
            );
        }
    }

    if let Some(pb) = progress_bar {
        pb.finish_with_message("done");
    }

    if cli.json {
        let payload = json!({
            "input": input.display().to_string(),
            "output_dir": plan.output_dir.display().to_string(),
            "total_frames": total_frames,
            "stride": plan.stride,
            "extracted": extracted,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{} {}",
            "success:".green().bold(),
            format!(
                "Extracted {extracted} frame(s) to {}",
                plan.output_dir.display()
            )
            .green()
        );
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["unreel", "input.gif"]).unwrap();
        assert_eq!(cli.input.as_deref().unwrap().to_str(), Some("input.gif"));
        assert_eq!(cli.max_frames, 30);
        assert!(cli.skip.is_none());
        assert!(cli.output_dir.is_none());
        assert!(!cli.progress);
        assert!(!cli.verbose);
        assert!(!cli.json);
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::try_parse_from([
            "unreel",
            "input.gif",
            "--max-frames",
            "60",
            "--skip",
            "5",
            "--output-dir",
            "stills",
            "--progress",
            "--verbose",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.max_frames, 60);
        assert_eq!(cli.skip, Some(5));
        assert_eq!(cli.output_dir.as_deref().unwrap().to_str(), Some("stills"));
        assert!(cli.progress);
        assert!(cli.verbose);
        assert!(cli.json);
    }

    #[test]
    fn missing_input_parses() {
        // Bare invocation is valid at the grammar level; run() prints usage
        // and exits 1.
        let cli = Cli::try_parse_from(["unreel"]).unwrap();
        assert!(cli.input.is_none());
    }

    #[test]
    fn reject_zero_values() {
        assert!(Cli::try_parse_from(["unreel", "input.gif", "--max-frames", "0"]).is_err());
        assert!(Cli::try_parse_from(["unreel", "input.gif", "--skip", "0"]).is_err());
    }

    #[test]
    fn reject_non_numeric_values() {
        assert!(Cli::try_parse_from(["unreel", "input.gif", "--max-frames", "many"]).is_err());
        assert!(Cli::try_parse_from(["unreel", "input.gif", "--skip", "1.5"]).is_err());
    }

    #[test]
    fn reject_unknown_flag() {
        assert!(Cli::try_parse_from(["unreel", "input.gif", "--bogus"]).is_err());
    }
}
