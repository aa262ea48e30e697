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

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use comprehend_contracts::{
    from_json, ClientConfig, CreateDocumentClassifierRequest, CreateEntityRecognizerRequest,
    DescribeDocumentClassifierRequest, DescribeEntityRecognizerRequest,
    DescribeEventsDetectionJobRequest, DescribePiiEntitiesDetectionJobRequest,
    DescribeTopicsDetectionJobRequest, DetectEntitiesRequest, Operation, ServiceRequest,
    StartEventsDetectionJobRequest, StartPiiEntitiesDetectionJobRequest,
    StartTopicsDetectionJobRequest, Validate, WireCodec,
};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Calls `$func::<Request>(args..)` for the request type bound to `$op`.
macro_rules! with_request_type {
    ($op:expr, $func:ident($($arg:expr),*)) => {
        match $op {
            Operation::CreateDocumentClassifier => $func::<CreateDocumentClassifierRequest>($($arg),*),
            Operation::CreateEntityRecognizer => $func::<CreateEntityRecognizerRequest>($($arg),*),
            Operation::DetectEntities => $func::<DetectEntitiesRequest>($($arg),*),
            Operation::DescribeDocumentClassifier => $func::<DescribeDocumentClassifierRequest>($($arg),*),
            Operation::DescribeEntityRecognizer => $func::<DescribeEntityRecognizerRequest>($($arg),*),
            Operation::StartEventsDetectionJob => $func::<StartEventsDetectionJobRequest>($($arg),*),
            Operation::StartPiiEntitiesDetectionJob => $func::<StartPiiEntitiesDetectionJobRequest>($($arg),*),
            Operation::StartTopicsDetectionJob => $func::<StartTopicsDetectionJobRequest>($($arg),*),
            Operation::DescribeEventsDetectionJob => $func::<DescribeEventsDetectionJobRequest>($($arg),*),
            Operation::DescribePiiEntitiesDetectionJob => $func::<DescribePiiEntitiesDetectionJobRequest>($($arg),*),
            Operation::DescribeTopicsDetectionJob => $func::<DescribeTopicsDetectionJobRequest>($($arg),*),
            other => bail!("{other} has no request model; see `comprehend-lint operations --modeled`"),
        }
    };
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    let filter = if args.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn,comprehend_lint=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_deref())?;
    debug!("using {:?}", config);

    match args.command {
        Commands::Check { operation, file } => {
            let operation: Operation = operation.parse()?;
            let body = read_body(&file)?;
            let clean = with_request_type!(operation, check(&body))?;
            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Render { operation, file } => {
            let operation: Operation = operation.parse()?;
            let body = read_body(&file)?;
            let codec = WireCodec::new(config);
            with_request_type!(operation, render(&codec, &body))?;
        }
        Commands::Operations { modeled } => {
            for op in Operation::all().iter().filter(|op| !modeled || op.is_modeled()) {
                println!("{:<40} {}", op.name(), op.target());
            }
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    match path {
        Some(path) => {
            let mut config = ClientConfig::from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?;
            config.apply_env_overrides()?;
            Ok(config)
        }
        None => Ok(ClientConfig::from_env()?),
    }
}

fn read_body(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Prints the request and its violations; returns whether it was clean.
fn check<R: ServiceRequest>(body: &str) -> Result<bool> {
    let request: R = from_json(body).context("parsing request body")?;
    println!("{request}");
    match request.validate() {
        Ok(()) => {
            info!("{} request satisfies every contract", R::OPERATION);
            println!("ok");
            Ok(true)
        }
        Err(errors) => {
            for violation in errors.iter() {
                println!("  {violation}");
            }
            println!("{} violation(s)", errors.len());
            Ok(false)
        }
    }
}

fn render<R: ServiceRequest>(codec: &WireCodec, body: &str) -> Result<()> {
    let request: R = from_json(body).context("parsing request body")?;
    let wire = codec.encode_request(&request)?;
    println!("POST {}", wire.endpoint);
    for (name, value) in wire.headers() {
        println!("{name}: {value}");
    }
    println!();
    println!("{}", wire.body);
    Ok(())
}
