use clap::Parser;
use prompt_manager::cli::Cli;
use prompt_manager::commands;
use prompt_manager::core::storage::AppCtx;

fn main() {
    if let Err(e) = run() {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let mut ctx = AppCtx::init(cli.dir.as_deref())?;

    let result = commands::dispatch(cli.command, &mut ctx);
    ctx.store.flush();
    result
}
