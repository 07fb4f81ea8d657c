// Headless walkabout demo: walks the player around a small walled room with
// a scripted controller and writes the last rendered frame to a PNG.
//
//     tilewalk [config.json] [out.png]
use std::path::PathBuf;
use std::process::ExitCode;

use glam::IVec2;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tilewalk::generate::write_debug_walkabout;
use tilewalk::{
    Camera, Canvas, DEBUG_SPRITE_H, DEBUG_SPRITE_W, Direction, Impassability, Player, Result, TileMap,
    WalkaboutConfig,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const VIEW_W: u32 = 160;
const VIEW_H: u32 = 120;

const FLOOR: [u8; 4] = [0x22, 0x26, 0x2E, 0xFF];
const WALL: [u8; 4] = [0x82, 0x74, 0x66, 0xFF];

const ROOM: [&str; 10] = [
    "################",
    "#..............#",
    "#..............#",
    "#.....##.......#",
    "#.....##.......#",
    "#..............#",
    "#..........#...#",
    "#..........#...#",
    "#..............#",
    "################",
];

/// Scripted "AI" controller: direction and number of ticks to hold it.
const ROUTE: [(Direction, u32); 5] = [
    (Direction::Right, 120),
    (Direction::Down, 60),
    (Direction::Left, 200),
    (Direction::Up, 40),
    (Direction::Right, 30),
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => WalkaboutConfig::load(&path)?,
        None => WalkaboutConfig::default(),
    };
    let out = args.next().map_or_else(|| PathBuf::from("walkabout_demo.png"), PathBuf::from);

    let debug_dir = config.walkabout_dir(&config.default_walkabout);
    if !debug_dir.is_dir() {
        warn!(dir = ?debug_dir, "default walkabout missing; generating placeholder sprites");
        write_debug_walkabout(&debug_dir, DEBUG_SPRITE_W, DEBUG_SPRITE_H)?;
    }

    let map = TileMap::from_rows(&ROOM, 16, 16)?;
    let mut player = Player::from_config(&config, None, Some(IVec2::new(24, 24)))?;

    let mut canvas = Canvas::new(VIEW_W, VIEW_H);
    let mut camera = Camera::new(VIEW_W, VIEW_H);
    camera.follow_speed = 8.0;
    let mut blocked = 0u32;

    for (direction, ticks) in ROUTE {
        for _ in 0..ticks {
            if !player.walkabout.r#move(direction, &map) {
                blocked += 1;
            }
            player.walkabout.tick(FRAME_DT);

            let focus = player.walkabout.position();
            let center = focus.topleft().as_vec2() + focus.size().as_vec2() / 2.0;
            camera.follow(center, FRAME_DT);
            camera.clamp_to(map.pixel_size());
            let offset = camera.offset();

            draw_map(&mut canvas, &map, offset);
            if let Err(e) = player.walkabout.blit(&mut canvas, offset) {
                warn!("skipping player draw: {e}");
            }
        }
    }

    info!(
        position = ?player.walkabout.position(),
        facing = %player.walkabout.direction,
        blocked,
        "route finished"
    );
    canvas.save(&out)?;
    info!(path = ?out, "wrote final frame");
    Ok(())
}

fn draw_map(canvas: &mut Canvas, map: &TileMap, offset: IVec2) {
    canvas.clear(FLOOR);
    let tile = map.tile_size();
    for region in map.impassability().iter().flatten() {
        canvas.fill_rect(region.x - offset.x, region.y - offset.y, tile.x, tile.y, WALL);
    }
}
