//! imgseek - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `imgseek build` | Embed every image under a folder into an index file |
//! | `imgseek search --query <text>` | Print the best matching images |
//! | `imgseek serve` | Run the search page and JSON API |

// Force-link imgseek-providers to ensure linkme registrations are included
extern crate imgseek_providers;

use clap::Parser;
use imgseek::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    run(cli, &mut stdout).await
}
