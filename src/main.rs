use clap::Parser;
use element_namer::cli::commands::{cmd_generate, cmd_name};
use element_namer::cli::config::{Cli, Commands, build_name_builder, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let builder = build_name_builder(&cli, &config);

    match cli.command {
        Commands::Name { snapshot, path } => {
            cmd_name(&snapshot, &path, &builder, cli.verbose)?;
        }
        Commands::Generate {
            snapshot,
            url,
            server_script,
            format,
            output,
            trace,
        } => {
            // Bridge script: CLI > config > default
            let script = server_script
                .as_deref()
                .or(config.bridge.server_script.as_deref());
            cmd_generate(
                snapshot.as_deref(),
                url.as_deref(),
                script,
                &format,
                output.as_deref(),
                trace.as_deref(),
                &builder,
                cli.verbose,
            )?;
        }
    }

    Ok(())
}
