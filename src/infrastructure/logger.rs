//! 日志基础设施

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化全局日志
    ///
    /// 设置了 `RUST_LOG` 时以它为准，否则按配置级别输出本 crate 和 tower_http 的日志。
    /// 配置加载失败时以 `LoggingConfig::default()` 调用，启动错误同样经 tracing 输出。
    pub fn init(config: &LoggingConfig) {
        tracing_subscriber::registry()
            .with(Self::filter(config))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    pub fn filter(config: &LoggingConfig) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(Self::directives(config))
                .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info"))
        })
    }

    fn directives(config: &LoggingConfig) -> String {
        format!(
            "product_api={level},tower_http={level}",
            level = config.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_yields_valid_filter() {
        let directives = Logger::directives(&LoggingConfig::default());
        assert_eq!(directives, "product_api=info,tower_http=info");
        assert!(EnvFilter::try_new(directives).is_ok());
    }

    #[test]
    fn test_startup_error_is_emitted_through_fallback_filter() {
        let filter = EnvFilter::try_new(Logger::directives(&LoggingConfig::default())).unwrap();
        let subscriber = tracing_subscriber::registry().with(filter);

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "product_api", tracing::Level::ERROR));
            assert!(!tracing::enabled!(target: "product_api", tracing::Level::DEBUG));
        });
    }
}
