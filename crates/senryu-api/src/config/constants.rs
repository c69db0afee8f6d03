//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 形態素解析器の1文あたりの上限を超えないよう 64KiB に制限する。
pub const MAX_TEXT_LENGTH: usize = 65_535;

/// バッチ検出で一度に受け付けるテキスト数の上限
pub const MAX_BATCH_SIZE: usize = 100;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// `PORT` が指定されたときに待ち受けるホスト
pub const PORT_BIND_HOST: &str = "0.0.0.0";

/// デフォルトの辞書プリセット名
///
/// UniDic (CWJ)。現代日本語書き言葉コーパスに基づく辞書。
pub const DEFAULT_PRESET_DICT: &str = "unidic-cwj";

/// GET /examples が返す例文と説明
pub const EXAMPLE_VERSES: [(&str, &str); 5] = [
  ("古池や蛙飛び込む水の音", "松尾芭蕉。標準的な 5-7-5"),
  ("柿食えば鐘が鳴るなり法隆寺", "正岡子規。標準的な 5-7-5"),
  ("夏草や、兵どもが夢の跡", "松尾芭蕉。読点は0音として扱われる"),
  ("閑さや岩にしみ入る蝉の声", "松尾芭蕉。標準的な 5-7-5"),
  ("今日も。静かさや岩にしみ入る蝉の声", "前置きの文を含むテキスト。重なり合う候補が複数検出される"),
];
