mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use lims_core::page_window;
use lims_proto::prelude::Sorter;

pub use commands::{Commands, Settings};

use crate::table::{self, Input, ShowOptions};

#[derive(Parser, Debug)]
#[command(
    name = "lims-grid",
    version,
    about = "Render LIMS report rows as a sortable, paginated table"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Runs the command and returns what should be printed.
    pub fn run(&self) -> Result<String> {
        match &self.command {
            Commands::Show {
                file,
                columns,
                sort,
                desc,
                page,
                expand,
                settings,
            } => {
                let json = std::fs::read_to_string(file)
                    .with_context(|| format!("failed to read {}", file.display()))?;
                let input = Input::parse(&json)
                    .with_context(|| format!("{} is not a row list or a page", file.display()))?;
                let config = settings.to_config().context("invalid table settings")?;

                let options = ShowOptions {
                    columns: columns.clone(),
                    sorter: sort.clone().map(|column| {
                        if *desc {
                            Sorter::desc(column)
                        } else {
                            Sorter::asc(column)
                        }
                    }),
                    page: *page,
                    page_size: settings.page_size,
                    expand: expand.clone(),
                };
                Ok(table::show(&input, &options, &config))
            }
            Commands::Window {
                current,
                total,
                width,
            } => {
                let pages = page_window(*current, *total, *width)
                    .map(|page| {
                        if page == *current {
                            format!("[{page}]")
                        } else {
                            page.to_string()
                        }
                    })
                    .collect::<Vec<_>>();
                Ok(format!("{}\n", pages.join(" ")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lims_core::config::{ENV_LIMS_PAGE_SIZE, ENV_LIMS_SHOW_DETAILS};
    use lims_core::TableConfig;

    #[test]
    fn test_parse_show_arguments() {
        let cli = Cli::parse_from([
            "lims-grid",
            "show",
            "rows.json",
            "--columns",
            "id:ID,name:Name",
            "--sort",
            "name",
            "--desc",
            "--expand",
            "3",
            "--expand",
            "7",
            "--no-details",
        ]);
        let Commands::Show {
            columns,
            sort,
            desc,
            expand,
            settings,
            ..
        } = cli.command
        else {
            panic!("expected show");
        };
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[1].label, "Name");
        assert_eq!(sort.as_deref(), Some("name"));
        assert!(desc);
        assert_eq!(expand, vec!["3", "7"]);
        assert!(settings.no_details);
    }

    #[test]
    fn test_window_marks_current_page() {
        let cli = Cli::parse_from([
            "lims-grid", "window", "--current", "10", "--total", "12", "--width", "5",
        ]);
        assert_eq!(cli.run().unwrap(), "8 9 [10] 11 12\n");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let settings = Settings {
            page_size: Some(0),
            ..Settings::default()
        };
        assert!(settings.apply(TableConfig::default()).is_err());
    }

    #[test]
    fn test_show_details_env_is_honoured() {
        let env = TableConfig::default()
            .with_overrides(|key| (key == ENV_LIMS_SHOW_DETAILS).then(|| "false".to_string()))
            .unwrap();
        let config = Settings::default().apply(env).unwrap();
        assert!(!config.show_details_buttons);
    }

    #[test]
    fn test_flags_override_env() {
        let env = TableConfig::default()
            .with_overrides(|key| (key == ENV_LIMS_PAGE_SIZE).then(|| "20".to_string()))
            .unwrap();
        let settings = Settings {
            page_size: Some(10),
            no_details: true,
            ..Settings::default()
        };
        let config = settings.apply(env).unwrap();
        assert_eq!(config.items_per_page, 10);
        assert!(!config.show_details_buttons);
    }
}
