use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設過濾：HTTP client 只留警告，避免每張卡的請求洗版
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "tcg_binder=debug,reqwest=info,hyper=warn,warn"
    } else {
        "tcg_binder=info,reqwest=warn,hyper=warn,warn"
    }
}

fn binder_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(binder_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// JSON 日誌，給 CI 或其他工具解析。
///
/// 事件欄位攤平到頂層，並附上目前的 `binder` span（含 `set` 欄位），
/// 一行就能知道是哪個卡包的紀錄。
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(binder_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();
}
