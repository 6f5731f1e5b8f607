//! User-facing notification texts.
use crate::FlowKind;

pub(crate) const MISSING_INPUT: &str = "画像とテキストを入力してください。";
pub(crate) const MISSING_ANIMATION_INPUT: &str =
    "画像・テキスト・アニメーションの種類を必ず選択してください。";
pub(crate) const UNSUPPORTED_CHOICE: &str = "選択された種類には対応していません";
pub(crate) const UNKNOWN_ERROR: &str = "不明なエラー";
pub(crate) const ERROR_PREFIX: &str = "エラー: ";

pub(crate) fn missing_input(flow: FlowKind) -> &'static str {
    if flow.requires_animation_type() {
        MISSING_ANIMATION_INPUT
    } else {
        MISSING_INPUT
    }
}

pub(crate) fn transport_failure(flow: FlowKind) -> &'static str {
    match flow {
        FlowKind::Main => "メイン画像の生成に失敗しました",
        FlowKind::Static => "画像生成に失敗しました",
        FlowKind::Animation => "アニメーション生成に失敗しました",
    }
}
