use std::path::PathBuf;

use clap::Parser;
use kvlite::start_repl;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional name to show in the prompt
    name: Option<String>,

    /// Optionally, sets a database file to use
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let name = cli.name.unwrap_or("db".into());
    let path = cli.file.unwrap_or("mydb.sqlite".into());

    if let Err(e) = start_repl(&name, &path) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
