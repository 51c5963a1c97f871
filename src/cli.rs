use crate::build_info;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Print expected layer delta values for the backpropagation fixture.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Output layout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Derive the groupings from the filter geometry
    /// instead of the hardcoded table.
    #[arg(short, long)]
    pub generated: bool,

    /// Check the values stored in this file instead of printing them.
    #[arg(short, long)]
    pub expected: Option<PathBuf>,

    /// Absolute tolerance used with --expected.
    #[arg(long, default_value = "1e-9", requires("expected"))]
    pub epsilon: f64,

    /// Progress messages on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        if args.verbose {
            eprintln!("EXECUTABLE: {}", name);
            eprintln!("GIT: {}", env!("GIT_DESCRIBE"));
        }

        args
    }

    pub fn log(&self, message: std::fmt::Arguments) {
        if self.verbose {
            eprintln!("{message}");
        }
    }
}

/// Serve profiling scopes to `puffin_viewer`,
/// the server flushes when dropped.
#[cfg(feature = "profile-with-puffin")]
pub fn start_puffin_server() -> std::io::Result<puffin_http::Server> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    eprintln!("Run this to view profiling data:  puffin_viewer {server_addr}");
    let server = puffin_http::Server::new(&server_addr)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    profiling::puffin::set_scopes_on(true);
    Ok(server)
}
