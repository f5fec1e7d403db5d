use anyhow::Context;
use clap::Parser;
use modcam_tools::config::cli::{ChangelogArgs, DocsAction, VenvArgs};
use modcam_tools::config::Command;
use modcam_tools::core::Storage;
use modcam_tools::utils::{logger, validation::Validate};
use modcam_tools::{
    is_virtual_env, ChangelogStamper, CliConfig, DocsConfig, LocalStorage, ProcessEnvironment,
    ToolError, ToolsConfig,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.json_logs);
    tracing::debug!("CLI config: {:?}", cli);

    let config = ToolsConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let result = match &cli.command {
        Command::Changelog(args) => run_changelog(config, args),
        Command::Venv(args) => run_venv(config, args),
        Command::Docs { action } => run_docs(config.docs, action),
    };

    if let Err(e) = result {
        tracing::error!(
            "{} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run_changelog(mut config: ToolsConfig, args: &ChangelogArgs) -> Result<(), ToolError> {
    args.apply(&mut config.changelog);
    config.changelog.validate()?;

    let outcome = ChangelogStamper::new(LocalStorage::default(), config.changelog.clone())
        .strict(args.strict)
        .dry_run(args.dry_run)
        .run()?;
    println!("Version: {}", outcome.version);

    if args.dry_run {
        if let Some(link) = &outcome.link_line {
            println!("Would stamp {} and append:", config.changelog.changelog_file);
            println!("{}", link);
        }
    }
    Ok(())
}

fn run_venv(mut config: ToolsConfig, args: &VenvArgs) -> Result<(), ToolError> {
    args.apply(&mut config.venv);
    config.venv.validate()?;

    let probe = ProcessEnvironment::new(config.venv.python.clone());
    let status = is_virtual_env(&probe, &config.venv.marker_env_vars)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", status);
    }
    Ok(())
}

fn run_docs(docs: DocsConfig, action: &DocsAction) -> Result<(), ToolError> {
    match action {
        DocsAction::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(&docs)?);
            } else {
                let rendered = toml::to_string(&docs).map_err(|e| ToolError::ConfigError {
                    message: e.to_string(),
                })?;
                print!("{}", rendered);
            }
        }
        DocsAction::Check { docs_dir } => {
            docs.validate()?;
            docs.check_files(docs_dir)?;
            println!("✅ Docs configuration OK");
        }
        DocsAction::Render { output } => {
            docs.validate()?;
            let conf = docs.render_conf_py()?;
            match output {
                Some(path) => {
                    LocalStorage::default().write_string(path, &conf)?;
                    tracing::info!("Wrote {}", path);
                }
                None => print!("{}", conf),
            }
        }
    }
    Ok(())
}
