//! Storefront - 餐厅单页店面的交互层
//!
//! # 架构概述
//!
//! 页面上的每个用户操作都是一个 [`UiEvent`]，由 [`Storefront`] 分发：
//!
//! - **购物车** (`cart`): 内存购物车、按钮路由、整区重绘
//! - **转交** (`handoff`): 订单/预约序列化为 WhatsApp 预填链接
//! - **组件** (`widgets`): 导航、平滑滚动、渐显、菜单筛选、日期时间选择器
//! - **菜单** (`catalog`): 可购买的菜单卡片
//!
//! # 模块结构
//!
//! ```text
//! storefront/src/
//! ├── core/          # 配置
//! ├── cart/          # 购物车状态与渲染
//! ├── handoff/       # 消息链接
//! ├── widgets/       # 页面组件
//! ├── utils/         # 日志
//! ├── catalog.rs     # 菜单
//! ├── page.rs        # 页面根 + 事件分发
//! └── cli.rs         # 终端前端
//! ```

pub mod cart;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod handoff;
pub mod page;
pub mod utils;
pub mod widgets;

// Re-export 公共类型
pub use cart::{CartStore, CartSurface, CartView};
pub use catalog::Menu;
pub use core::Config;
pub use handoff::{LinkBuilder, LinkOpener};
pub use page::{PAGE_SECTIONS, Reaction, Storefront, UiEvent};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Start logging for the configured level and directory
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::debug!(environment = %config.environment, "Environment ready");
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
