//! `folio` - CLI for the portfolio content pipeline
//!
//! This binary lists and inspects project records, reports broken project
//! documents, and publishes project media into the public directory.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{bail, Context};
use clap::Parser;

use folio::cli::{
    AssetsCommand, CheckCommand, Cli, Command, ConfigCommand, OutputFormat, ProjectsCommand,
    ShowCommand,
};
use folio::{init_logging, public_asset_name, AssetPublisher, Config, ProjectRecord, ProjectResolver};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    let resolver = ProjectResolver::from_config(&config);

    // Execute the command
    match cli.command {
        Command::Projects(cmd) => handle_projects(&resolver, &cmd),
        Command::Show(cmd) => handle_show(&resolver, &cmd),
        Command::Check(cmd) => handle_check(&resolver, &cmd),
        Command::Assets(cmd) => handle_assets(&config, cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_projects(resolver: &ProjectResolver, cmd: &ProjectsCommand) -> anyhow::Result<()> {
    let records = if cmd.featured {
        resolver.featured_projects()
    } else {
        resolver.all_projects()
    };

    match cmd.format {
        OutputFormat::Plain => {
            for record in &records {
                println!("{}", record.slug);
            }
        }
        OutputFormat::Table => {
            println!("{:<24} {:<9} {:<12} TITLE", "SLUG", "FEATURED", "STATUS");
            for record in &records {
                println!(
                    "{:<24} {:<9} {:<12} {}",
                    record.slug,
                    if record.featured { "yes" } else { "no" },
                    record.status,
                    record.title
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}

fn handle_show(resolver: &ProjectResolver, cmd: &ShowCommand) -> anyhow::Result<()> {
    let page = resolver
        .load(&cmd.slug)
        .with_context(|| format!("resolving project '{}'", cmd.slug))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&page.record)?);
    } else if cmd.html {
        print!("{}", page.html);
    } else {
        print_record(&page.record);
    }
    Ok(())
}

fn print_record(record: &ProjectRecord) {
    println!("{}", record.title);
    println!("{}", "=".repeat(record.title.chars().count().max(1)));
    println!();
    println!("Slug:        {}", record.slug);
    println!("Featured:    {}", record.featured);
    println!("Status:      {}", record.status);
    println!("Period:      {}", record.period);
    println!("Role:        {}", record.role);
    if let Some(team_size) = &record.team_size {
        println!("Team size:   {team_size}");
    }
    println!("Stack:       {}", record.stack.join(", "));
    println!("Tags:        {}", record.tags.join(", "));
    if let Some(image) = &record.image {
        println!("Image:       {image}");
    }
    if !record.summary.is_empty() {
        println!();
        println!("{}", record.summary);
    }
    if !record.links.is_empty() {
        println!();
        println!("[Links]");
        for (kind, url) in &record.links {
            println!("  {kind:<10} {url}");
        }
    }
    if !record.impact.is_empty() {
        println!();
        println!("[Impact]");
        for item in &record.impact {
            println!("  - {item}");
        }
    }
    if let Some(gallery) = &record.gallery {
        println!();
        println!("[Gallery]");
        for item in gallery {
            let kind = item
                .kind
                .map_or_else(|| "?".to_string(), |k| format!("{k:?}").to_lowercase());
            println!("  {kind:<6} {}", item.src.as_deref().unwrap_or("(no src)"));
        }
    }
}

fn handle_check(resolver: &ProjectResolver, cmd: &CheckCommand) -> anyhow::Result<()> {
    let outcomes = resolver.check();
    let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();

    if cmd.json {
        let report: Vec<_> = outcomes
            .iter()
            .map(|(slug, outcome)| {
                serde_json::json!({
                    "slug": slug,
                    "path": resolver.document_path(slug),
                    "ok": outcome.is_ok(),
                    "error": outcome.as_ref().err().map(ToString::to_string),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (slug, outcome) in &outcomes {
            match outcome {
                Ok(record) => println!("ok    {slug:<24} {}", record.title),
                Err(e) => println!("FAIL  {slug:<24} {e}"),
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} projects failed to load", outcomes.len());
    }
    Ok(())
}

fn handle_assets(config: &Config, cmd: AssetsCommand) -> anyhow::Result<()> {
    match cmd {
        AssetsCommand::Publish { dry_run, json } => {
            let report = AssetPublisher::from_config(config)
                .dry_run(dry_run)
                .publish()
                .context("publishing assets")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for asset in &report.assets {
                    println!(
                        "{:<10} {} -> {}",
                        format!("{:?}", asset.action).to_lowercase(),
                        asset.source.display(),
                        asset.public_path
                    );
                }
                println!();
                println!(
                    "{} copied, {} unchanged, {} skipped{}",
                    report.copied,
                    report.unchanged,
                    report.skipped,
                    if report.dry_run { " (dry run)" } else { "" }
                );
            }
        }
        AssetsCommand::Name { slug, file } => {
            println!("/{}", public_asset_name(&slug, &file));
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Content]");
                println!("  Projects dir:       {}", config.projects_dir().display());
                println!("  Extension:          {}", config.content.extension);
                println!("  Slugs:              {}", config.content.slugs.join(", "));
                println!();
                println!("[Assets]");
                println!("  Public dir:         {}", config.public_dir().display());
                println!("  Source dir:         {}", config.asset_source_dir().display());
                println!("  Prefix:             {}", config.assets.prefix);
                println!("  Extensions:         {}", config.assets.extensions.join(", "));
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => bail!("configuration error: {e}"),
            }
        }
    }
    Ok(())
}
