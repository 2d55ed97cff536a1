//! URL 表示色を選ぶ Outbound ポート
//!
//! 乱択は見た目のためだけなので、テストで決定的に差し替えられるよう外出しする。

/// n 色のパレットからインデックス（0..n）を 1 つ返す
pub trait ColorPicker: Send + Sync {
    fn pick(&mut self, n: usize) -> usize;
}
