// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "comprehend-lint")]
#[command(about = "Check and render Comprehend request bodies without calling the service")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Client configuration file (.toml, .yaml or .yml)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Report every contract violation in a JSON request body.
    Check {
        #[arg(help = "Operation name, e.g. DetectEntities")]
        operation: String,
        #[arg(help = "Path to the JSON request body")]
        file: PathBuf,
    },
    /// Print the wire envelope the configured codec would produce.
    Render {
        #[arg(help = "Operation name, e.g. DetectEntities")]
        operation: String,
        #[arg(help = "Path to the JSON request body")]
        file: PathBuf,
    },
    /// List operation names and their targets.
    Operations {
        #[arg(long, help = "Only operations with request models")]
        modeled: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "comprehend-lint",
            "--config",
            "client.toml",
            "check",
            "DetectEntities",
            "request.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("client.toml")));
        assert!(!cli.debug);
        match cli.command {
            Commands::Check { operation, file } => {
                assert_eq!(operation, "DetectEntities");
                assert_eq!(file, PathBuf::from("request.json"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_operations_flag() {
        let cli = Cli::try_parse_from(["comprehend-lint", "--debug", "operations", "--modeled"])
            .unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Operations { modeled: true }));
    }

    #[test]
    fn test_render_requires_file() {
        assert!(Cli::try_parse_from(["comprehend-lint", "render", "DetectEntities"]).is_err());
    }
}
