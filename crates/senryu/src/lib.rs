//! senryu 川柳検出ライブラリー
//!
//! 形態素解析結果（トークン列）からモーラ数を数え、5-7-5 の川柳と
//! 字余り（5-8-5 / 6-7-5 / 5-7-6）を検出する。
//! 形態素解析には vibrato-rkyv を用いる。
//!
//! ```
//! use senryu::models::Token;
//!
//! let tokens = vec![
//!   Token::new("古池や", "ふるいけや", "名詞"),
//!   Token::new("蛙飛び込む", "かわずとびこむ", "動詞"),
//!   Token::new("水の音", "みずのおと", "名詞"),
//! ];
//! let results = senryu::detect(&tokens);
//! assert_eq!(results.len(), 1);
//! assert!(results[0].is_standard);
//! ```

/// 設定モジュール - SenryuConfig 等の設定構造体を定義
pub mod config;

/// 検出モジュール - 分割探索・フィルタ・重複整理・結果組み立て
pub mod detector;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - SenryuError, SenryuResult 等のエラー型を定義
pub mod errors;

/// データモデルモジュール - Token, Phrase, DetectionResult 等のデータ構造を定義
pub mod models;

/// モーラ計数モジュール
pub mod mora;

/// 句のパターン照合モジュール
pub mod pattern;

/// サービスモジュール - SenryuService 等の上位レベルAPIを提供
pub mod service;

/// テキスト前処理モジュール
pub mod text;

/// トークナイザーモジュール - vibrato-rkyv を用いた形態素解析器
pub mod tokenizer;

/// 再エクスポート
pub use config::SenryuConfig;
pub use detector::{OverlapPolicy, SenryuDetector, detect};
pub use errors::{SenryuError, SenryuResult};
pub use models::{DetectionResult, MoraPattern, Phrase, SenryuPattern, Token};
pub use mora::count_mora;
pub use service::SenryuService;
