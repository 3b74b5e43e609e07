// Strokecast CLI Entry Point

use strokecast_cli::{output, router::CommandRouter};

#[tokio::main]
async fn main() {
    // Route and execute command
    let result = CommandRouter::route().await;

    // Exit with appropriate code
    if let Err(e) = result {
        output::print_error(&e.user_message());
        std::process::exit(1);
    }
}
