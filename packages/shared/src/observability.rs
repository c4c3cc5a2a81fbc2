//! # Observability 基盤
//!
//! facade 本体とプローブ CLI が共有するトレーシング初期化と、
//! Request ID の採番・リクエストスパン生成をまとめる。
//!
//! ログ形式は `LOG_FORMAT`（`json` / `pretty`）、レベルは `RUST_LOG` で制御する。

/// Request ID を運ぶ HTTP ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,fitbridge_bff=debug,fitbridge_domain=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON
    Json,
    /// 端末向けの整形表示
    #[default]
    Pretty,
}

impl LogFormat {
    /// 大文字小文字を区別せずにパースする。未知の値は `None`。
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if value.eq_ignore_ascii_case("pretty") {
            Some(Self::Pretty)
        } else {
            None
        }
    }

    /// 任意の参照関数から `LOG_FORMAT` を解決する
    ///
    /// 未設定は既定値、不正値は既定値に倒したうえで stderr に警告を出す
    /// （subscriber 初期化前のため `tracing` は使えない）。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup("LOG_FORMAT") else {
            return Self::default();
        };
        Self::parse(&raw).unwrap_or_else(|| {
            eprintln!("warning: LOG_FORMAT={raw:?} is not recognized; using pretty");
            Self::default()
        })
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// ルートスパン `app` の `service` フィールド
    pub service_name:   String,
    pub log_format:     LogFormat,
    /// `RUST_LOG` が無いときに使う EnvFilter 指定
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
            default_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// 環境変数からログ形式を読み取って設定を作る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }

    /// 既定フィルタを差し替える
    #[must_use]
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// グローバル subscriber を登録し、`app` スパンに入った状態のガードを返す
///
/// ガードを保持している間に出たログには `service` が付く。
/// 戻り値を捨てるとスパンから即座に抜けるため、`main` の末尾まで束縛しておくこと。
#[cfg(feature = "observability")]
#[must_use = "ガードを破棄すると service フィールドが付かなくなる"]
pub fn init_tracing(config: TracingConfig) -> tracing::span::EnteredSpan {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let output = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().with_target(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .init();

    tracing::info_span!("app", service = %config.service_name).entered()
}

/// UUID v7 を Request ID として採番する
///
/// `SetRequestIdLayer::x_request_id(MakeRequestUuidV7)` で使う。
/// 受信ヘッダーに既に ID がある場合、レイヤーはそちらを優先して採番を呼ばない。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let value = http::HeaderValue::try_from(uuid::Uuid::now_v7().to_string()).ok()?;
        Some(tower_http::request_id::RequestId::new(value))
    }
}

/// リクエスト 1 件分のスパンを作る（`TraceLayer::make_span_with` 用）
///
/// Request ID は `SetRequestIdLayer` が入れた拡張を優先し、無ければヘッダーを見る。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let from_extension = request
        .extensions()
        .get::<tower_http::request_id::RequestId>()
        .and_then(|id| id.header_value().to_str().ok());
    let request_id = from_extension
        .or_else(|| {
            request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
        })
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
