//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Projects command arguments.
#[derive(Debug, Args)]
pub struct ProjectsCommand {
    /// Only list featured projects
    #[arg(long)]
    pub featured: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Project slug
    pub slug: String,

    /// Output the record as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Print the rendered body HTML
    #[arg(long)]
    pub html: bool,
}

/// Check command arguments.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Asset commands.
#[derive(Debug, Subcommand)]
pub enum AssetsCommand {
    /// Copy project media into the public directory
    Publish {
        /// Report what would be copied without writing
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the public path for a project file
    Name {
        /// Owning project slug
        slug: String,

        /// File name, e.g. cover.png
        file: String,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One slug per line
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_output_format_value_names() {
        let names: Vec<String> = OutputFormat::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["plain", "table", "json"]);
    }

    #[test]
    fn test_show_command_debug() {
        let cmd = ShowCommand {
            slug: "comsafe".to_string(),
            json: false,
            html: true,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("comsafe"));
        assert!(debug_str.contains("html"));
    }

    #[test]
    fn test_assets_command_debug() {
        let cmd = AssetsCommand::Publish {
            dry_run: true,
            json: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Publish"));
        assert!(debug_str.contains("dry_run"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
