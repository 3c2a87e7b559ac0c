use ratatui::layout::{Constraint, Layout, Rect};

/// Vertical bands of the profile screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub top_bar: Rect,
    pub profile: Rect,
    pub button: Rect,
    pub posts: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> ScreenRegions {
    let [top_bar, profile, button, posts, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(9),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    ScreenRegions {
        top_bar,
        profile,
        button,
        posts,
        footer,
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Row for something lifted `offset` out of `max_offset` from the bottom of `area`.
pub fn lifted_row(area: Rect, offset: u16, max_offset: u16) -> u16 {
    if area.height == 0 || max_offset == 0 {
        return area.y;
    }
    let travel = u32::from(area.height - 1);
    let lift = travel * u32::from(offset.min(max_offset)) / u32::from(max_offset);
    area.y + area.height - 1 - lift as u16
}
