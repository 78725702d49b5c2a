//! gremlind-config: configuration renderer for the gremlind agent.
//!
//! This binary runs at deployment time. It reads the `gremlin`
//! properties out of one or more manifest snippets and renders the
//! YAML configuration file consumed by the agent.
//!
//! It is made of two stages:
//!  * `config` - manifest snippets, merged into agent properties.
//!  * `render` - properties plus deployment context, turned into the final document.

extern crate env_logger;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate serde_yaml;
extern crate structopt;
extern crate toml;

mod config;
mod render;

use crate::config::{ConfigInput, GremlinInput};
use crate::render::DeploymentContext;
use failure::Fallible;
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;

/// Command-line options.
#[derive(Debug, StructOpt)]
#[structopt(name = "gremlind-config")]
struct CliOptions {
    /// Manifest snippet to read (YAML, or TOML by extension, `-` for stdin).
    ///
    /// Repeatable, later snippets win.
    #[structopt(
        short = "m",
        long = "manifest",
        parse(from_os_str),
        raw(number_of_values = "1")
    )]
    manifests: Vec<PathBuf>,
    /// Deployment job name.
    #[structopt(long = "job-name")]
    job_name: Option<String>,
    /// Deployment instance identifier.
    #[structopt(long = "instance-id")]
    instance_id: Option<String>,
    /// Destination file (default: stdout).
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    /// Verbosity level, when `RUST_LOG` is unset.
    #[structopt(short = "v", parse(from_occurrences))]
    verbosity: u8,
}

fn main() {
    let opts = CliOptions::from_args();

    if let Err(e) = init_logging(opts.verbosity) {
        eprintln!("failed to initialize logging: {}", e);
    }

    if let Err(e) = run(opts) {
        let mut causes = e.iter_chain();
        if let Some(top) = causes.next() {
            error!("{}", top);
            eprintln!("error: {}", top);
        }
        for cause in causes {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) -> Fallible<()> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.try_init()?;
    Ok(())
}

fn run(opts: CliOptions) -> Fallible<()> {
    info!("rendering gremlind configuration");

    let cfg = ConfigInput::read_config(&opts.manifests)?;
    let context = deployment_context(opts.job_name, opts.instance_id, &cfg.gremlin)?;
    let rendered = render::render(&cfg.gremlin, &context);
    debug!("rendered identifier: {}", rendered.identifier);

    match opts.output {
        Some(path) => {
            rendered.write_to(&path)?;
            info!("configuration written to {}", path.display());
        }
        None => {
            let doc = rendered.to_yaml()?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(doc.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Assemble deployment context.
///
/// Both values are required unless the manifest pins an identifier.
fn deployment_context(
    job_name: Option<String>,
    instance_id: Option<String>,
    properties: &GremlinInput,
) -> Fallible<DeploymentContext> {
    match (job_name, instance_id) {
        (Some(name), Some(id)) => Ok(DeploymentContext::new(name, id)),
        (name, id) => {
            if properties.identifier.is_empty() {
                bail!(
                    "missing deployment context (--job-name and --instance-id) \
                     for default identifier"
                );
            }
            Ok(DeploymentContext::new(
                name.unwrap_or_default(),
                id.unwrap_or_default(),
            ))
        }
    }
}
