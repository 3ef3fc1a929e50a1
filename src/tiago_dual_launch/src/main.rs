//! tiago_dual_launch CLI

use clap::{Args, Parser, Subcommand};
use std::{collections::HashMap, path::PathBuf, process};
use tiago_dual_launch::{
    config::ResolverConfig,
    error::{LaunchError, Result},
    launches::LaunchFile,
    record::{default_merge_dir, generate_record},
    Resolver,
};

#[derive(Parser)]
#[command(name = "tiago_dual_launch")]
#[command(about = "Launch configuration resolver for the TIAGo Dual robot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a launch file into a composition plan
    Plan {
        /// Launch file name (e.g. default_controllers)
        launch: LaunchFile,

        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        #[command(flatten)]
        resolver: ResolverOpts,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve a launch file and lower it into runtime commands
    Record {
        /// Launch file name (e.g. default_controllers)
        launch: LaunchFile,

        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        #[command(flatten)]
        resolver: ResolverOpts,

        /// Directory for merged parameter files
        #[arg(long)]
        merge_dir: Option<PathBuf>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// Show the arguments a launch file declares
    ShowArgs {
        /// Launch file name (e.g. default_controllers)
        launch: LaunchFile,
    },
}

#[derive(Args)]
struct ResolverOpts {
    /// Directory holding one share folder per package
    #[arg(long, env = "TIAGO_DUAL_SHARE_ROOT")]
    share_root: Option<PathBuf>,

    /// Calibration override merged over the base controller parameters
    #[arg(long)]
    calibration_file: Option<PathBuf>,

    /// YAML resolver config; flags take precedence over its values
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ResolverOpts {
    fn into_config(self) -> Result<ResolverConfig> {
        let mut config = match (self.config, self.share_root.clone()) {
            (Some(path), _) => ResolverConfig::from_yaml_file(&path)?,
            (None, Some(share_root)) => ResolverConfig::new(share_root),
            (None, None) => {
                return Err(LaunchError::InvalidArgument(
                    "either --share-root or --config is required".to_string(),
                ))
            }
        };

        if let Some(share_root) = self.share_root {
            config.share_root = share_root;
        }
        if let Some(calibration_file) = self.calibration_file {
            config.calibration_file = calibration_file;
        }
        Ok(config)
    }
}

fn parse_launch_arg(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once(":=") {
        Some((name, value)) if !name.is_empty() && !value.contains(":=") => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(format!("Invalid launch argument format: {}", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Plan {
            launch,
            args,
            resolver,
            output,
        } => {
            let resolver = Resolver::new(resolver.into_config()?);
            let cli_args: HashMap<String, String> = args.into_iter().collect();
            let plan = resolver.resolve(launch, &cli_args)?;
            let json = plan.to_json()?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    log::info!("Wrote plan: {}", path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Commands::Record {
            launch,
            args,
            resolver,
            merge_dir,
            output,
        } => {
            let resolver = Resolver::new(resolver.into_config()?);
            let cli_args: HashMap<String, String> = args.into_iter().collect();
            let plan = resolver.resolve(launch, &cli_args)?;

            let merge_dir = merge_dir.unwrap_or_else(default_merge_dir);
            let record = generate_record(&plan, resolver.config(), &merge_dir)?;
            std::fs::write(&output, record.to_json()?)?;

            log::info!("Generated record: {}", output.display());
            log::info!(
                "  {} controllers, {} includes, {} nodes",
                record.controller.len(),
                record.include.len(),
                record.node.len()
            );
            Ok(())
        }
        Commands::ShowArgs { launch } => {
            println!(
                "Arguments of {}/{}.launch.py (pass arguments as '<name>:=<value>'):",
                launch.package(),
                launch.name()
            );
            println!();
            for arg in launch.schema().arguments() {
                println!("    '{}':", arg.name);
                println!("        {}", arg.description);
                if let Some(choices) = &arg.choices {
                    println!("        Valid choices are: [{}]", choices.join(", "));
                }
                match &arg.default {
                    Some(default) => println!("        (default: '{}')", default),
                    None => println!("        (required)"),
                }
            }
            Ok(())
        }
    }
}
