use paydesk_cli::{Config, Menu, init_logger, print_banner};

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level, false, config.log_dir.as_deref())?;

    print_banner();
    tracing::info!(
        roster = %config.roster_path.display(),
        ledger = %config.ledger_path.display(),
        "Paydesk starting"
    );

    // 2. Open the stores and run the operator menu
    let mut menu = Menu::new(&config)?;
    menu.run()?;

    tracing::info!("Paydesk exiting");
    Ok(())
}
