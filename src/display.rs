/// Rendering layer; all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game session.  No game logic is performed; this module only translates
/// world coordinates into terminal cells and queues draw commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use side_scroller::camera::to_screen_x;
use side_scroller::compute::can_restart;
use side_scroller::entities::{
    CollectibleKind, Enemy, EnemyKind, Facing, GameMode, GameSession, Owner, PlatformColor, Rect,
};
use side_scroller::level::{level_name, LEVEL_COUNT};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_HEALTH: Color = Color::Red;
const C_HUD_LIVES: Color = Color::Magenta;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::White;
const C_PLAYER: Color = Color::DarkYellow;
const C_PLAYER_HURT: Color = Color::White;
const C_ENEMY_NORMAL: Color = Color::Blue;
const C_ENEMY_SHOOTER: Color = Color::Red;
const C_ENEMY_BOSS: Color = Color::Magenta;
const C_ENEMY_HURT: Color = Color::White;
const C_SHOT_PLAYER: Color = Color::Yellow;
const C_SHOT_ENEMY: Color = Color::Red;
const C_GROUND: Color = Color::Green;
const C_WOOD: Color = Color::DarkYellow;
const C_STONE: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

/// Maps the world viewport onto the terminal: row 0 is the HUD, the last row
/// is the controls hint, everything in between is play area.
struct Viewport {
    cols: u16,
    rows: u16,
    camera_x: f32,
    world_w: f32,
    world_h: f32,
}

impl Viewport {
    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2).max(1)
    }

    fn col(&self, world_x: f32) -> i32 {
        (to_screen_x(world_x, self.camera_x) / self.world_w * self.cols as f32).floor() as i32
    }

    fn row(&self, world_y: f32) -> i32 {
        1 + (world_y / self.world_h * self.play_rows() as f32).floor() as i32
    }

    /// Cell span of a world rectangle; never less than one cell each way.
    fn cells(&self, r: &Rect) -> (i32, i32, i32, i32) {
        let c0 = self.col(r.x);
        let r0 = self.row(r.y);
        let c1 = self.col(r.right()).max(c0 + 1);
        let r1 = self.row(r.bottom()).max(r0 + 1);
        (c0, r0, c1, r1)
    }

    fn in_play_area(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols as i32 && row >= 1 && row <= self.play_rows() as i32
    }
}

/// Queue `text` at a cell, clipped to the play area.
fn put<W: Write>(
    out: &mut W,
    vp: &Viewport,
    col: i32,
    row: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if !vp.in_play_area(col, row) {
        return Ok(());
    }
    let room = (vp.cols as i32 - col) as usize;
    let clipped: String = text.chars().take(room).collect();
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(clipped))?;
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let vp = Viewport {
        cols,
        rows,
        camera_x: session.camera_x,
        world_w: session.config.screen_width,
        world_h: session.config.screen_height,
    };

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, &vp, session)?;
    draw_platforms(out, &vp, session)?;
    draw_collectibles(out, &vp, session)?;
    for enemy in &session.enemies {
        draw_enemy(out, &vp, enemy)?;
    }
    draw_projectiles(out, &vp, session)?;
    draw_player(out, &vp, session)?;
    draw_controls_hint(out, &vp, session)?;

    match session.mode {
        GameMode::Menu => draw_menu(out, &vp)?,
        GameMode::LevelComplete { timer } => draw_level_complete(out, &vp, session, timer)?,
        GameMode::GameOver { victory, .. } => draw_game_over(out, &vp, session, victory)?,
        GameMode::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, vp: &Viewport, session: &GameSession) -> std::io::Result<()> {
    let p = &session.player;
    let max = session.config.player.max_health.max(1);

    // Health bar, left
    const BAR: u32 = 10;
    let filled = (p.health * BAR / max) as usize;
    let bar = format!(
        "HP [{}{}] {:>3}",
        "█".repeat(filled),
        "·".repeat(BAR as usize - filled),
        p.health
    );
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&bar))?;

    // Lives
    let lives = format!("  Lives:{}", "♥".repeat(p.lives.min(9) as usize));
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives))?;

    // Level, centre
    let level_str = format!(
        "[ LEVEL {}/{} · {} ]",
        session.level.min(LEVEL_COUNT),
        LEVEL_COUNT,
        level_name(session.level)
    );
    let lx = (vp.cols / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Score, right
    let score_str = format!("Score:{:>7}", p.score);
    let rx = vp.cols.saturating_sub(score_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_str))?;

    Ok(())
}

// ── World ─────────────────────────────────────────────────────────────────────

fn draw_platforms<W: Write>(
    out: &mut W,
    vp: &Viewport,
    session: &GameSession,
) -> std::io::Result<()> {
    for platform in &session.platforms {
        let (glyph, color) = match platform.color {
            PlatformColor::Ground => ("▓", C_GROUND),
            PlatformColor::Wood => ("▬", C_WOOD),
            PlatformColor::Stone => ("█", C_STONE),
        };
        let (c0, r0, c1, r1) = vp.cells(&platform.rect);
        let c0 = c0.max(0);
        let c1 = c1.min(vp.cols as i32);
        if c1 <= c0 {
            continue;
        }
        let span = glyph.repeat((c1 - c0) as usize);
        for row in r0..r1 {
            put(out, vp, c0, row, &span, color)?;
        }
    }
    Ok(())
}

/// Symbols:
///   +  (red)     Health
///   ♥  (green)   Life
///   $  (yellow)  Coin
fn draw_collectibles<W: Write>(
    out: &mut W,
    vp: &Viewport,
    session: &GameSession,
) -> std::io::Result<()> {
    for c in &session.collectibles {
        let (glyph, color) = match c.kind {
            CollectibleKind::Health => ("+", Color::Red),
            CollectibleKind::Life => ("♥", Color::Green),
            CollectibleKind::Coin => ("$", Color::Yellow),
        };
        let (cx, cy) = c.rect.center();
        put(out, vp, vp.col(cx), vp.row(cy + c.bounce * 5.0), glyph, color)?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, vp: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let (head, torso, color) = match enemy.kind {
        EnemyKind::Normal => ("o", "Ħ", C_ENEMY_NORMAL),
        EnemyKind::Shooter => ("ö", "Ħ", C_ENEMY_SHOOTER),
        EnemyKind::Boss => ("◉", "▐█▌", C_ENEMY_BOSS),
    };
    let color = if enemy.hurt_timer > 0 { C_ENEMY_HURT } else { color };
    let (c0, r0, _, r1) = vp.cells(&enemy.body.rect());

    // Health bar above the head
    let bar_w: u32 = if enemy.kind == EnemyKind::Boss { 8 } else { 3 };
    let filled = (enemy.health * bar_w / enemy.max_health.max(1)) as usize;
    let bar = format!("{}{}", "▬".repeat(filled), " ".repeat(bar_w as usize - filled));
    put(out, vp, c0, r0 - 1, &bar, Color::Red)?;

    put(out, vp, c0, r0, head, color)?;
    for row in (r0 + 1)..r1 {
        put(out, vp, c0, row, torso, color)?;
    }
    Ok(())
}

fn draw_projectiles<W: Write>(
    out: &mut W,
    vp: &Viewport,
    session: &GameSession,
) -> std::io::Result<()> {
    for p in &session.projectiles {
        let color = match p.owner {
            Owner::Player => C_SHOT_PLAYER,
            Owner::Enemy => C_SHOT_ENEMY,
        };
        put(out, vp, vp.col(p.x), vp.row(p.y), "•", color)?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, vp: &Viewport, session: &GameSession) -> std::io::Result<()> {
    // Fox, two cells wide, tail trailing the head:
    //   ≈ô   or   ô≈
    //   ██        ██
    let p = &session.player;
    let color = if p.hurt_timer > 0 && session.frame % 4 < 2 {
        C_PLAYER_HURT
    } else {
        C_PLAYER
    };
    let (c0, r0, _, r1) = vp.cells(&p.body.rect());
    let head = match p.facing {
        Facing::Right => "≈ô",
        Facing::Left => "ô≈",
    };
    put(out, vp, c0, r0, head, color)?;
    for row in (r0 + 1)..r1 {
        put(out, vp, c0, row, "██", color)?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    vp: &Viewport,
    session: &GameSession,
) -> std::io::Result<()> {
    let hint = match session.mode {
        GameMode::Menu => "ENTER / SPACE : Start   Q : Quit",
        GameMode::GameOver { .. } => "R : Restart   Q : Quit",
        _ => "← → / A D : Move   SPACE / W : Jump   F : Shoot   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_box<W: Write>(
    out: &mut W,
    vp: &Viewport,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let cx = vp.cols / 2;
    let start_row = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_menu<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let lines = [
        ("╔══════════════════════╗".to_string(), Color::Yellow),
        ("║     ANIMAL  HERO     ║".to_string(), Color::Yellow),
        ("║  vs Human Enemies    ║".to_string(), Color::Yellow),
        ("╚══════════════════════╝".to_string(), Color::Yellow),
        (String::new(), Color::White),
        ("Press ENTER or SPACE to start".to_string(), Color::Green),
        ("Arrows/A D move · SPACE/W jump · F shoot".to_string(), Color::DarkGrey),
    ];
    draw_box(out, vp, &lines)
}

fn draw_level_complete<W: Write>(
    out: &mut W,
    vp: &Viewport,
    session: &GameSession,
    timer: u32,
) -> std::io::Result<()> {
    let mut lines = vec![
        (format!("LEVEL {} COMPLETE!", session.level), Color::Green),
        (format!("Score: {}", session.player.score), Color::Yellow),
    ];
    // Second half of the countdown shows what comes next
    if timer < session.config.timers.level_complete * 2 / 3 {
        if session.level + 1 < LEVEL_COUNT {
            lines.push(("Get ready for the next level...".to_string(), Color::White));
        } else if session.level + 1 == LEVEL_COUNT {
            lines.push(("Get ready for the FINAL BATTLE!".to_string(), Color::Red));
        }
    }
    draw_box(out, vp, &lines)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    vp: &Viewport,
    session: &GameSession,
    victory: bool,
) -> std::io::Result<()> {
    let (title, color) = if victory {
        ("║      VICTORY!      ║", Color::Green)
    } else {
        ("║    GAME  OVER      ║", Color::Red)
    };
    let mut lines = vec![
        ("╔════════════════════╗".to_string(), color),
        (title.to_string(), color),
        ("╚════════════════════╝".to_string(), color),
        (format!("Final Score: {:>6}", session.player.score), Color::Yellow),
        (
            format!("Level Reached: {}/{}", session.level.min(LEVEL_COUNT), LEVEL_COUNT),
            Color::White,
        ),
    ];
    if can_restart(session) {
        lines.push(("R - Play Again  Q - Quit".to_string(), Color::Green));
    }
    draw_box(out, vp, &lines)
}
