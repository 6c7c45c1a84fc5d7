use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::themes::ThemeProfile;
use crate::ui::app::{App, FormField};
use crate::ui::effects::Overlay;
use crate::ui::footer::Footer;
use crate::ui::form::{RsvpChoice, RsvpStatus};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, toast_rect};
use crate::ui::scene::Scene;
use crate::ui::theme::{
    FOCUS_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, TOAST_ERROR, TOAST_INFO, TOAST_TEXT, TOAST_WARNING,
    TOAST_WARNING_TEXT,
};
use crate::ui::toast::ToastKind;

const FORM_WIDTH: u16 = 60;
const DOOR_WIDTH: u16 = 26;
const DOOR_HEIGHT: u16 = 11;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let profile = app.profile();

    frame.render_widget(Header::new().widget(app.scene(), profile), header);
    frame.render_widget(Clear, body);

    // Exactly one scene is drawn per frame.
    match app.scene() {
        Scene::Landing => draw_landing(frame, body, profile),
        Scene::ThemeSelect => draw_theme_select(frame, body, app),
        Scene::InvitationForm => draw_form(frame, body, app, profile),
        Scene::Success => draw_success(frame, body, profile),
    }

    frame.render_widget(
        Footer::new().widget(footer, app.scene(), app.scene_mode()),
        footer,
    );

    draw_overlays(frame.buffer_mut(), body, app, now);
    draw_toast(frame, body, app);
}

fn draw_landing(frame: &mut Frame<'_>, body: Rect, profile: &ThemeProfile) {
    let palette = profile.palette;
    frame.render_widget(Block::default().style(Style::default().bg(palette.primary)), body);

    let door = centered_rect_by_size(body, DOOR_WIDTH, DOOR_HEIGHT);
    let mut lines = vec![Line::from(""); 3];
    for word in profile.door_label.split_whitespace() {
        lines.push(Line::from(Span::styled(
            word.to_string(),
            Style::default()
                .fg(palette.light)
                .add_modifier(Modifier::BOLD),
        )));
    }
    let frame_widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.primary)),
    );
    frame.render_widget(frame_widget, door);

    let prompt_y = door.y + door.height + 1;
    if prompt_y < body.y + body.height {
        let prompt = Rect {
            x: body.x,
            y: prompt_y,
            width: body.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(profile.door_prompt)
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.light).bg(palette.primary)),
            prompt,
        );
    }
}

fn draw_theme_select(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Choose your invitation",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (idx, profile) in app.themes().iter().enumerate() {
        let selected = idx == app.theme_cursor();
        let marker = if selected { "›" } else { " " };
        let mut name_line = Line::from(vec![
            Span::raw(format!(" {} ", marker)),
            Span::styled("■ ", Style::default().fg(profile.palette.primary)),
            Span::styled(
                profile.display_name,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);
        let mut title_line = Line::from(vec![
            Span::raw("     "),
            Span::styled(profile.title, Style::default().fg(MUTED_TEXT)),
        ]);
        if selected {
            let highlight = Style::default().bg(FOCUS_HIGHLIGHT);
            name_line = name_line.style(highlight);
            title_line = title_line.style(highlight);
        }
        lines.push(name_line);
        lines.push(title_line);
        lines.push(Line::from(""));
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, FORM_WIDTH, height);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED_TEXT)),
        ),
        area,
    );
}

fn draw_form(frame: &mut Frame<'_>, body: Rect, app: &App, profile: &ThemeProfile) {
    let palette = profile.palette;
    let form = app.form();
    let focus = app.focus();
    let label = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            profile.title,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.details, Style::default().fg(HEADER_TEXT))),
        Line::from(Span::styled(profile.venue, Style::default().fg(MUTED_TEXT))),
        Line::from(""),
        Line::from(Span::styled("YOUR NAME", label)),
    ];

    let name_line = if form.name.is_empty() {
        Line::from(Span::styled(
            format!("  {}", profile.name_placeholder),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {}", form.name),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    lines.push(focused(name_line, focus == FormField::Name));
    lines.push(Line::from(""));

    let guests_line = Line::from(vec![
        Span::styled("TOTAL GUESTS   ", label),
        Span::raw("[-] "),
        Span::styled(
            form.guests.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" [+]"),
    ]);
    lines.push(focused(guests_line, focus == FormField::Guests));
    lines.push(Line::from(Span::styled(
        "─".repeat(FORM_WIDTH as usize - 4),
        Style::default().fg(palette.primary),
    )));
    lines.push(Line::from(Span::styled(profile.question.to_uppercase(), label)));

    for (idx, choice) in RsvpChoice::ALL.into_iter().enumerate() {
        let option = profile.option(choice);
        let selected = form.status.is_selected(choice);
        let color = if selected { palette.choice(choice) } else { HEADER_TEXT };
        let bullet = if selected { "(●)" } else { "( )" };
        let text_line = Line::from(vec![
            Span::styled(format!("{} {} ", idx + 1, bullet), Style::default().fg(color)),
            Span::styled(
                option.text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]);
        lines.push(focused(text_line, focus == FormField::Option(choice)));
        lines.push(Line::from(Span::styled(
            format!("      {}", option.subtext),
            Style::default().fg(MUTED_TEXT),
        )));
        if choice == RsvpChoice::Maybe && form.status == RsvpStatus::Maybe {
            lines.push(Line::from(Span::styled(
                format!("      ⓘ {}", profile.maybe_note),
                Style::default().fg(palette.maybe),
            )));
        }
    }

    lines.push(Line::from(""));
    let button = if app.in_flight() {
        "[ Sending... ]"
    } else {
        "[ Confirm RSVP ]"
    };
    let button_style = if app.in_flight() {
        Style::default().fg(MUTED_TEXT)
    } else {
        Style::default().fg(palette.light).add_modifier(Modifier::BOLD)
    };
    lines.push(focused(
        Line::from(Span::styled(button, button_style)).alignment(Alignment::Center),
        focus == FormField::Submit,
    ));

    let height = (lines.len() as u16 + 2).min(body.height);
    let area = centered_rect_by_size(body, FORM_WIDTH, height);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.primary)),
        ),
        area,
    );
}

fn draw_success(frame: &mut Frame<'_>, body: Rect, profile: &ThemeProfile) {
    let palette = profile.palette;
    let lines = vec![
        Line::from("🦞  💖"),
        Line::from(""),
        Line::from(Span::styled(
            profile.success_title,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(profile.success_body, Style::default().fg(HEADER_TEXT))),
    ];
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, FORM_WIDTH, height + 2);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.primary)),
            ),
        area,
    );
}

fn draw_overlays(buf: &mut Buffer, body: Rect, app: &App, now: Instant) {
    if body.width == 0 || body.height == 0 {
        return;
    }

    for spark in app.confetti().sparks(now) {
        let x = body.x + (spark.x * f32::from(body.width)) as u16;
        let y = body.y + (spark.y * f32::from(body.height)) as u16;
        put(buf, body, x, y, spark.glyph, spark.color);
    }

    if let Some(progress) = app.effects().progress(Overlay::Celebration, now) {
        // Hands rise from the bottom edge and fade out.
        let rise = (progress * f32::from(body.height) * 0.6) as u16;
        let y = (body.y + body.height - 1).saturating_sub(rise);
        let step = body.width / 6;
        for i in 1..=5u16 {
            let x = body.x + step * i;
            put(buf, body, x, y, '👏', HEADER_TEXT);
        }
    }

    if let Some(progress) = app.effects().progress(Overlay::Redirect, now) {
        // Plane crosses from the bottom-left to the top-right.
        let x = body.x + (progress * f32::from(body.width.saturating_sub(1))) as u16;
        let y = (body.y + body.height - 1)
            .saturating_sub((progress * f32::from(body.height.saturating_sub(1))) as u16);
        put(buf, body, x, y, '✈', HEADER_TEXT);
    }
}

fn put(buf: &mut Buffer, body: Rect, x: u16, y: u16, glyph: char, color: Color) {
    if x < body.x || y < body.y || x >= body.x + body.width || y >= body.y + body.height {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(glyph).set_fg(color);
    }
}

fn draw_toast(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let toast = app.toast();
    if !toast.visible {
        return;
    }
    let (icon, bg, fg) = match toast.kind {
        ToastKind::Info => ("ⓘ ", TOAST_INFO, TOAST_TEXT),
        ToastKind::Warning => ("⚠ ", TOAST_WARNING, TOAST_WARNING_TEXT),
        ToastKind::Error => ("", TOAST_ERROR, TOAST_TEXT),
    };
    let text = format!("{}{}", icon, toast.message);
    let width = text.chars().count() as u16 + 4;
    let area = toast_rect(body, width);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(bg))
                .style(Style::default().bg(bg)),
        ),
        area,
    );
}

fn focused(line: Line<'static>, is_focused: bool) -> Line<'static> {
    if is_focused {
        line.style(Style::default().bg(FOCUS_HIGHLIGHT))
    } else {
        line
    }
}
