use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::animation::{lerp_rgb, pulse_fraction, HEART_MAX_OFFSET};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::TopBar;
use crate::ui::layout::{centered_rect_by_size, layout_regions, lifted_row};
use crate::ui::theme::{
    rgb, BUTTON_TEXT, FOLLOW_PULSE, GLOBAL_BORDER, HEADER_TEXT, HEART, MUTED_TEXT, SPINNER,
    STATUS_ERROR, UNFOLLOW_PULSE,
};
use crate::ui::view::{PostsView, ProfileView};

pub const GRID_COLUMNS: usize = 3;
const GRID_CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 30;
const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    let regions = layout_regions(area);
    let profile = ProfileView::project(app.screen(), now);

    frame.render_widget(TopBar::new(&profile.title).widget(), regions.top_bar);
    draw_profile(frame, &profile, regions.profile);
    draw_follow_button(frame, app, &profile, regions.button, now);
    draw_posts(frame, &PostsView::project(app.screen()), regions.posts, app, now);
    let footer = Footer::new(app.last_command_error());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn draw_profile(frame: &mut Frame<'_>, profile: &ProfileView, area: Rect) {
    if let Some(message) = &profile.error {
        draw_centered_message(frame, message, area);
        return;
    }

    let [top, bottom] = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);
    let [image, stats] =
        Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(top);

    let image_url = profile.image_url.as_deref().unwrap_or("");
    let image_widget = Paragraph::new(Line::from(Span::styled(
        image_url.to_string(),
        Style::default().fg(MUTED_TEXT),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(image_widget, image);

    let stat_areas: [Rect; 3] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(stats);
    let values = [
        (profile.posts.to_string(), "Posts"),
        (profile.followers.to_string(), "Followers"),
        (profile.following.to_string(), "Following"),
    ];
    for ((number, name), stat_area) in values.into_iter().zip(stat_areas) {
        let stat = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                number,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(name, Style::default().fg(HEADER_TEXT))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(stat, stat_area);
    }

    let [description, heart] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(5)]).areas(bottom);
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            profile.username.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.description.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(text, inset(description, 2));

    if let Some(offset) = profile.heart_offset {
        if heart.width > 0 && heart.height > 0 {
            let row = lifted_row(heart, offset, HEART_MAX_OFFSET);
            let cell = Rect::new(heart.x, row, heart.width, 1);
            let glyph = Paragraph::new(Span::styled("♥", Style::default().fg(HEART)))
                .alignment(Alignment::Center);
            frame.render_widget(glyph, cell);
        }
    }
}

fn draw_follow_button(
    frame: &mut Frame<'_>,
    app: &App,
    profile: &ProfileView,
    area: Rect,
    now: Instant,
) {
    let (from, to) = if profile.is_following {
        UNFOLLOW_PULSE
    } else {
        FOLLOW_PULSE
    };
    let color = rgb(lerp_rgb(from, to, pulse_fraction(app.pulse_elapsed(now))));
    let button_area = centered_rect_by_size(area, BUTTON_WIDTH, area.height);

    let button = Paragraph::new(Line::from(Span::styled(
        profile.button_label(),
        Style::default()
            .fg(BUTTON_TEXT)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(color))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(button, button_area);
}

fn draw_posts(frame: &mut Frame<'_>, posts: &PostsView, area: Rect, app: &App, now: Instant) {
    match posts {
        PostsView::Hidden => {}
        PostsView::Loading => {
            let index = (app.pulse_elapsed(now).as_millis() / 100) as usize % SPINNER_FRAMES.len();
            let spinner = Paragraph::new(Span::styled(
                SPINNER_FRAMES[index],
                Style::default().fg(SPINNER),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(spinner, centered_rect_by_size(area, area.width, 1));
        }
        PostsView::Error(message) => {
            let line = Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            ));
            let widget = Paragraph::new(line).alignment(Alignment::Center);
            frame.render_widget(widget, centered_rect_by_size(area, area.width, 1));
        }
        PostsView::Grid(images) => draw_grid(frame, images, area),
    }
}

fn draw_grid(frame: &mut Frame<'_>, images: &[String], area: Rect) {
    let columns: [Rect; GRID_COLUMNS] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area);

    for (index, image) in images.iter().enumerate() {
        let row = (index / GRID_COLUMNS) as u16;
        let column = columns[index % GRID_COLUMNS];
        let y = area.y + row * GRID_CELL_HEIGHT;
        if y + GRID_CELL_HEIGHT > area.y + area.height {
            break;
        }
        let cell = Rect::new(column.x, y, column.width, GRID_CELL_HEIGHT);
        let widget = Paragraph::new(Span::styled(image.clone(), Style::default().fg(MUTED_TEXT)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(HEADER_TEXT)),
            );
        frame.render_widget(widget, cell);
    }
}

fn draw_centered_message(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let widget = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(STATUS_ERROR),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(widget, centered_rect_by_size(area, area.width, 1));
}

fn inset(area: Rect, horizontal: u16) -> Rect {
    let margin = horizontal.min(area.width / 2);
    Rect {
        x: area.x + margin,
        width: area.width - margin * 2,
        ..area
    }
}
