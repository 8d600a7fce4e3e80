use anyhow::Context;
use clap::Parser;
use storefront::cli::{RenderFormat, TerminalSurface, run_session};
use storefront::handoff::ConsoleOpener;
use storefront::widgets::AnchorTargets;
use storefront::{AppError, Config, Menu, PAGE_SECTIONS, Storefront, print_banner, setup_environment};

/// Restaurant storefront driven from the terminal
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
struct Args {
    /// JSON menu file (built-in menu when omitted)
    #[arg(long, env = "MENU_PATH")]
    menu: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// How the cart is printed after each change
    #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
    format: RenderFormat,

    /// Keep date/time inputs as plain text
    #[arg(long)]
    no_pickers: bool,
}

fn main() -> anyhow::Result<()> {
    // 1. .env 先于 clap 读取，使 env 回退生效
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    // 2. 加载配置
    let mut config = Config::from_env();
    if let Some(menu) = args.menu {
        config.menu_path = Some(menu);
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if args.no_pickers {
        config.date_picker_enabled = false;
    }

    setup_environment(&config);
    print_banner();

    config
        .validate()
        .map_err(AppError::from)
        .context("invalid configuration")?;

    // 3. 菜单
    let menu = Menu::load_or_builtin(config.menu_path.as_deref())
        .map_err(AppError::from)
        .context("failed to load menu")?;
    tracing::info!(items = menu.len(), environment = %config.environment, "Storefront starting");

    let today = shared::util::today();
    let mut page = Storefront::new(
        &config,
        menu,
        AnchorTargets::new(PAGE_SECTIONS.iter().copied()),
        TerminalSurface::stdout(args.format),
        ConsoleOpener::stdout(),
        today,
    );

    println!("© {} - digite help para os comandos", shared::util::footer_year(today));

    // 4. 会话循环
    let stdin = std::io::stdin();
    run_session(&mut page, stdin.lock(), std::io::stdout()).context("session aborted")?;

    tracing::info!(lines = page.cart().len(), "Storefront closed");
    Ok(())
}
