use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Right,
    Left,
    Down,
    Up,
}

impl FromStr for NavKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowRight" => Ok(NavKey::Right),
            "ArrowLeft" => Ok(NavKey::Left),
            "ArrowDown" => Ok(NavKey::Down),
            "ArrowUp" => Ok(NavKey::Up),
            other => Err(format!("not a navigation key: {}", other)),
        }
    }
}

/// 格線寬度與單張卡片寬度（像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub grid_width: f64,
    pub card_width: f64,
}

impl GridLayout {
    pub fn new(grid_width: f64, card_width: f64) -> Self {
        Self {
            grid_width,
            card_width,
        }
    }

    /// 至少一欄；卡片寬度不合理時視為單欄
    pub fn columns(&self) -> usize {
        if self.card_width.is_nan() || self.card_width <= 0.0 || !self.grid_width.is_finite() {
            return 1;
        }
        let columns = (self.grid_width / self.card_width).floor();
        if columns < 1.0 {
            1
        } else {
            columns as usize
        }
    }
}

/// 在 `visible_count` 張可見卡片之間移動，頭尾循環。
/// `current` 為 `None` 時視為位置 -1。
pub fn next_position(
    current: Option<usize>,
    key: NavKey,
    visible_count: usize,
    columns: usize,
) -> Option<usize> {
    if visible_count == 0 {
        return None;
    }
    let n = visible_count as i64;
    let from = current.map(|c| c as i64).unwrap_or(-1);
    let step = columns.max(1) as i64;

    let target = match key {
        NavKey::Right => from + 1,
        NavKey::Left => from - 1,
        NavKey::Down => from + step,
        NavKey::Up => from - step,
    };
    Some(target.rem_euclid(n) as usize)
}
