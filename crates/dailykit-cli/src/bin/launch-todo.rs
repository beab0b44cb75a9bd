//! Launches the to-do list app from this executable's directory.

use dailykit_core::LaunchTarget;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = dailykit_cli::handlers::launch::run_default(LaunchTarget::TodoList).await;
    std::process::exit(code);
}
