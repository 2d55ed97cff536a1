//! ColorPicker の標準実装
//!
//! 外部の乱数 crate は使わず、起動時刻シードの xorshift で選ぶ。

use crate::ports::outbound::ColorPicker;

/// 時刻シードの xorshift64 による ColorPicker 実装
pub struct ClockSeededPicker {
    state: u64,
}

impl ClockSeededPicker {
    pub fn new() -> Self {
        Self {
            state: seed_from_clock(),
        }
    }
}

impl Default for ClockSeededPicker {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_from_clock() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    // xorshift は 0 が固定点になるため避ける
    nanos | 1
}

impl ColorPicker for ClockSeededPicker {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x % n as u64) as usize
    }
}

/// テスト用: 0, 1, 2, ... と巡回する決定的な ColorPicker
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct SequentialPicker {
    next: usize,
}

impl ColorPicker for SequentialPicker {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let idx = self.next % n;
        self.next += 1;
        idx
    }
}
