//! User-facing messages.
//!
//! The backend and its users speak Japanese, so every string surfaced to a
//! page (validation errors, fallback error messages, confirmations) lives
//! here.

// Preconditions
pub const USER_ID_REQUIRED: &str = "ユーザーIDが必要です";
pub const LOGIN_REQUIRED_TO_SAVE: &str = "保存するにはログインが必要です";
pub const KEYWORDS_REQUIRED: &str = "キーワードを入力してください";
pub const BOTH_KEYWORDS_REQUIRED: &str = "トレンドとバイラルの両方のキーワードを入力してください";
pub const PLATFORM_REQUIRED: &str = "プラットフォームを1つ以上選択してください";
pub const GENRE_REQUIRED: &str = "チャンネルジャンルを入力してください";
pub const PERSONA_REQUIRED: &str = "ペルソナ情報をすべて入力してください";
pub const VIDEO_COUNT_RANGE: &str = "動画数は1〜20の範囲で指定してください";
pub const CSV_ONLY: &str = "CSVファイルのみアップロード可能です";
pub const CSV_REQUIRED: &str = "CSVファイルを選択してください";
pub const CSV_EMPTY: &str = "ファイルが空です";
pub const CHANNEL_URL_REQUIRED: &str = "チャンネルURLを入力してください。";
pub const ANALYSIS_ID_REQUIRED: &str = "ユーザー情報または分析IDが不足しています。";
pub const INVALID_ID: &str = "IDの形式が正しくありません";

// Confirmations
pub const ANALYSIS_SAVED: &str = "分析結果を保存しました。";

// Default summaries for saved runs
pub const DEFAULT_TRENDS_SUMMARY: &str = "トレンド分析";
pub const DEFAULT_VIRAL_SUMMARY: &str = "バイラル分析";

// Fallbacks used when the backend gives no `detail`
pub const FULL_PLAN_FAILED: &str = "企画案の生成に失敗しました";
pub const STRATEGY_FAILED: &str = "戦略の生成に失敗しました";
pub const VIDEO_CONCEPTS_FAILED: &str = "動画コンセプトの生成に失敗しました";
pub const TRENDS_FAILED: &str = "トレンド分析に失敗しました";
pub const VIRAL_FAILED: &str = "バイラル動画検索に失敗しました";
pub const CSV_ANALYSIS_FAILED: &str = "CSV分析に失敗しました";
pub const REPORT_FAILED: &str = "レポート生成に失敗しました";
pub const COMBINED_PLAN_FAILED: &str = "企画案生成に失敗しました";
pub const DASHBOARD_FAILED: &str = "ダッシュボードの生成に失敗しました";
pub const LIST_CHANNELS_FAILED: &str = "チャンネル一覧の取得に失敗しました";
pub const ADD_CHANNEL_FAILED: &str = "チャンネルの登録に失敗しました";
pub const DELETE_CHANNEL_FAILED: &str = "チャンネルの削除に失敗しました";
pub const CHANNEL_STATS_FAILED: &str = "チャンネル統計の取得に失敗しました";
pub const CHANNEL_ANALYSES_FAILED: &str = "チャンネル分析履歴の取得に失敗しました";
pub const KEYWORD_STATS_FAILED: &str = "キーワード統計の取得に失敗しました";
pub const SAVE_RUN_FAILED: &str = "分析結果の保存に失敗しました";
pub const LIST_RUNS_FAILED: &str = "分析履歴の取得に失敗しました";
pub const GET_RUN_FAILED: &str = "分析結果の取得に失敗しました";
pub const DELETE_RUN_FAILED: &str = "分析結果の削除に失敗しました";
pub const ANALYSIS_STATS_FAILED: &str = "統計情報の取得に失敗しました";
