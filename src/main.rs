use std::{sync::OnceLock, time::Duration};

use anyhow::anyhow;
use clap::Parser;
use nannou::{
    color::{self, Srgb},
    geom::{Rect, pt2},
    prelude::Key,
};
use snakes_ladders::{
    engine::{Summary, simulate},
    ladders::{Coord, Game, GameConfig, Phase, Piece, Tile, TileKind},
};
use tracing_subscriber::EnvFilter;

mod cli;
mod feed;

use cli::{Cli, Command};
use feed::Feed;

const AUTO_PAUSE: Duration = Duration::from_millis(700);

/// Everything the window needs, prepared and validated before it opens.
struct Setup {
    game: Game,
    names: [String; 2],
    auto: bool,
}

static SETUP: OnceLock<Setup> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.command() {
        Command::Simulate { games, seed } => {
            let summary = simulate(&config, games, seed)?;
            print_summary(&config, &summary);
        }
        Command::Play { auto } => {
            let game = Game::new(&config)?;
            SETUP
                .set(Setup { game, names: config.names.clone(), auto })
                .map_err(|_| anyhow!("board window already prepared"))?;
            nannou::app(model).update(update).run();
        }
    }
    Ok(())
}

fn print_summary(config: &GameConfig, summary: &Summary) {
    println!("============================================");
    println!("Games: {}, Unfinished: {}", summary.games, summary.unfinished);
    for piece in Piece::ALL {
        println!(
            "{} Wins: {}, Winrate: {:.2}%",
            config.name(piece),
            summary.wins[piece.index()],
            summary.win_rate(piece)
        );
    }
    println!(
        "Rolls per game: avg {:.1}, min {}, max {}, most common {}",
        summary.average_rolls(),
        summary.min_rolls.map_or("-".to_string(), |r| r.to_string()),
        summary.max_rolls,
        summary.mode_rolls().map_or("-".to_string(), |r| r.to_string()),
    );
    println!("Shortcuts taken: {}, Setbacks taken: {}", summary.shortcuts, summary.setbacks);
    println!("============================================");
}

struct Model {
    game: Game,
    feed: Feed,
    auto: bool,
    idle: Duration,
}

fn model(app: &nannou::App) -> Model {
    app.new_window()
        .title("Snakes and Ladders")
        .size(1100, 800)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let setup = SETUP.get().expect("setup is stored before the app starts");
    Model {
        game: setup.game.clone(),
        feed: Feed::new(setup.names.clone()),
        auto: setup.auto,
        idle: Duration::ZERO,
    }
}

fn roll(model: &mut Model) {
    model.idle = Duration::ZERO;
    if let Err(err) = model.game.roll_die(&mut rand::rng(), &mut model.feed) {
        model.feed.set_message(err.to_string());
    }
}

fn key_pressed(_app: &nannou::App, model: &mut Model, key: Key) {
    match key {
        Key::Space => roll(model),
        Key::R => model.game.reset(&mut model.feed),
        Key::A => model.auto = !model.auto,
        _ => (),
    }
}

fn update(_app: &nannou::App, model: &mut Model, update: nannou::event::Update) {
    model.game.advance(update.since_last, &mut model.feed);

    if !model.auto || model.game.is_busy() || model.game.phase() != Phase::InProgress {
        model.idle = Duration::ZERO;
        return;
    }
    model.idle += update.since_last;
    if model.idle >= AUTO_PAUSE {
        roll(model);
    }
}

fn tile_color(kind: TileKind, coord: Coord) -> Srgb<u8> {
    match kind {
        TileKind::Shortcut(_) => color::rgb_u32(0x3498db),
        TileKind::Setback(_) => color::rgb_u32(0xe74c3c),
        TileKind::Plain if (coord.col + coord.row) % 2 == 0 => color::rgb_u32(0x88cc88),
        TileKind::Plain => color::rgb_u32(0x444444),
    }
}

fn view(app: &nannou::App, model: &Model, frame: nannou::frame::Frame) {
    let draw = app.draw();
    draw.background().color(color::BLACK);

    let window_rect = app.window_rect();
    let (width, height) = (window_rect.w(), window_rect.h());

    let panel_width = 320.0;
    let panel_rect = Rect::from_w_h(panel_width, height).shift_x(width / 2.0 - panel_width / 2.0);
    let board_area = Rect::from_w_h(width - panel_width, height).shift_x(-panel_width / 2.0);

    let path = model.game.path();
    let rules = model.game.rules();
    let tile_size = (board_area.w() / path.columns() as f32)
        .min(board_area.h() / path.rows() as f32)
        * 0.95;
    let board_rect = Rect::from_w_h(tile_size * path.columns() as f32, tile_size * path.rows() as f32)
        .shift_x(board_area.x());

    let center = |tile: Tile| {
        let coord = path.coord_of(tile).unwrap_or(Coord::new(0, 0));
        pt2(
            board_rect.left() + (coord.col as f32 + 0.5) * tile_size,
            board_rect.bottom() + (coord.row as f32 + 0.5) * tile_size,
        )
    };

    // Tiles
    for (tile, coord) in path.iter() {
        let p = center(tile);
        draw.rect()
            .xy(p)
            .w_h(tile_size * 0.96, tile_size * 0.96)
            .color(tile_color(rules.classify(tile), coord));
        draw.text(&tile.to_string())
            .xy(p + pt2(0.0, tile_size * 0.3))
            .font_size((tile_size / 5.0) as u32)
            .color(color::WHITE);
    }

    // Shortcuts and setbacks
    for (from, to) in rules.shortcuts() {
        draw.line()
            .start(center(from))
            .end(center(to))
            .weight(tile_size / 12.0)
            .color(color::rgb_u32(0x3498db));
    }
    for (from, to) in rules.setbacks() {
        draw.line()
            .start(center(from))
            .end(center(to))
            .weight(tile_size / 12.0)
            .color(color::rgb_u32(0xe74c3c));
    }

    // Pieces
    for piece in Piece::ALL {
        let tile = model.game.position(piece);
        let offset = match piece {
            Piece::First => -tile_size / 5.0,
            Piece::Second => tile_size / 5.0,
        };
        let p = center(tile) + pt2(offset, -tile_size / 8.0);
        let fill = match piece {
            Piece::First => color::RED,
            Piece::Second => color::GREEN,
        };
        draw.ellipse()
            .xy(p)
            .w_h(tile_size * 0.35, tile_size * 0.35)
            .color(fill)
            .stroke(color::BLACK)
            .stroke_weight(2.0);

        if let Some(heading) = path.heading(tile) {
            let angle = heading.radians();
            let tip = p + pt2(angle.cos(), angle.sin()) * tile_size * 0.25;
            draw.line().start(p).end(tip).weight(3.0).color(color::BLACK);
        }
    }

    // Side panel
    draw.rect()
        .x_y(panel_rect.x(), panel_rect.y())
        .w_h(panel_rect.w(), panel_rect.h())
        .color(color::BLACK);

    let x = panel_rect.x();
    let mut y = panel_rect.top() - 50.0;
    let mut line = |text: &str, size: u32| {
        draw.text(text)
            .x_y(x, y)
            .w(panel_width - 20.0)
            .font_size(size)
            .color(color::WHITE);
        y -= size as f32 + 14.0;
    };

    line("Snakes and Ladders", 30);
    line(&model.feed.turn_line(), 16);
    for piece in Piece::ALL {
        line(&model.feed.status_line(piece, rules), 16);
    }
    if let Some(roll) = model.feed.roll_line() {
        line(&roll, 16);
    }
    if !model.feed.message().is_empty() {
        line(model.feed.message(), 16);
    }
    line("", 16);
    line("Space: roll   R: restart", 14);
    line(if model.auto { "A: autoplay (on)" } else { "A: autoplay (off)" }, 14);

    if let Some(banner) = model.feed.banner() {
        draw.rect()
            .xy(board_rect.xy())
            .w_h(board_rect.w(), tile_size * 2.0)
            .color(color::rgba(0.0, 0.0, 0.0, 0.8));
        draw.text(&banner)
            .xy(board_rect.xy())
            .w(board_rect.w())
            .font_size((tile_size / 2.0) as u32)
            .color(color::WHITE);
    }

    draw.to_frame(app, &frame).unwrap();
}
