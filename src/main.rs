//! Snake Arcade entry point
//!
//! Headless native driver: plays one seeded session with a greedy steering
//! policy and logs the event stream. Set `RUST_LOG=debug` for step detail.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use snake_arcade::consts::FRAME_DT;
    use snake_arcade::sim::{GameEvent, SessionController, SessionState};
    use snake_arcade::{ContentPack, Difficulty, SessionConfig};

    env_logger::init();
    log::info!("Snake Arcade (headless) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);

    let mut session = match SessionController::new(SessionConfig::default(), ContentPack::builtin(), seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("Invalid content: {err}");
            std::process::exit(1);
        }
    };
    session.set_difficulty(Some(Difficulty::Medium));
    session.start_session();

    // Two minutes of 60 Hz frames
    let max_frames = 120 * 60;
    let mut final_score = None;
    for _ in 0..max_frames {
        if let Some(dir) = autopilot::choose(&session) {
            session.set_input(dir);
        }
        session.tick(FRAME_DT);

        for event in session.drain_events() {
            match event {
                GameEvent::GameOver { final_score: score } => final_score = Some(score),
                GameEvent::AchievementProgress(id) => log::info!("Achievement: {}", id.as_str()),
                other => log::debug!("{other:?}"),
            }
        }
        if session.state() == SessionState::GameOver {
            break;
        }
    }

    match final_score {
        Some(score) => println!("Game over (seed {seed}): final score {score}"),
        None => println!(
            "Time up (seed {seed}): score {}, lives {}",
            session.score(),
            session.lives()
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No native driver on wasm
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use glam::IVec2;
    use snake_arcade::content::ItemKind;
    use snake_arcade::sim::{Direction, SessionController};

    const DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Safe direction that gets closest to the nearest food
    pub fn choose(session: &SessionController) -> Option<Direction> {
        let model = session.model();
        let head = model.head()?;
        let bounds = session.config().bounds();

        let target = session
            .spawner()
            .active_items()
            .filter(|(_, active)| active.item.kind == ItemKind::Collectible)
            .map(|(pos, _)| *pos)
            .min_by_key(|pos| manhattan(*pos, head));

        let is_safe = |cell: IVec2| {
            cell.x.abs() <= bounds.x
                && cell.y.abs() <= bounds.y
                && !model.occupies(cell)
                && session
                    .spawner()
                    .item_at(cell)
                    .is_none_or(|active| active.item.kind != ItemKind::Obstacle)
        };

        DIRECTIONS
            .into_iter()
            .filter(|dir| *dir != model.direction.opposite())
            .filter(|dir| is_safe(head + dir.to_ivec2()))
            .min_by_key(|dir| target.map_or(0, |t| manhattan(head + dir.to_ivec2(), t)))
    }

    fn manhattan(a: IVec2, b: IVec2) -> i32 {
        (a - b).abs().element_sum()
    }
}
