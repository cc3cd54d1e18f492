//! Fixed timestep simulation tick
//!
//! Per playing tick: hero, then each enemy followed by its contact check,
//! then coins, then the fall-out check. The first fatal hit ends the tick.

use super::state::{GameEvent, GamePhase, World};
use crate::consts::*;
use crate::error::SimError;

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, dt: f32) -> Result<Vec<GameEvent>, SimError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SimError::InvalidTimestep(dt));
    }

    let mut events = Vec::new();

    match world.phase {
        GamePhase::Menu => {}

        GamePhase::GameOver => {
            world.game_over_time += dt;
            if world.game_over_time > GAME_OVER_DELAY {
                world.setup_level()?;
                world.phase = GamePhase::Menu;
                events.push(GameEvent::ReturnedToMenu);
                log::info!("Returning to menu");
            }
        }

        GamePhase::Playing => play(world, dt, &mut events),
    }

    Ok(events)
}

fn play(world: &mut World, dt: f32, events: &mut Vec<GameEvent>) {
    world.time_ticks += 1;

    let step = world.hero.character.update(dt, &world.platforms);
    if step.jumped {
        events.push(GameEvent::Jumped);
    }

    for i in 0..world.enemies.len() {
        world.enemies[i].update(dt, &world.platforms);

        if world.hero.body().rect.intersects(&world.enemies[i].body.rect) && hit(world, events) {
            return;
        }
    }

    for coin in world.coins.iter_mut() {
        if !coin.collected && world.hero.character.body.rect.intersects(&coin.rect) {
            coin.collected = true;
            world.hero.score += COIN_VALUE;
            events.push(GameEvent::CoinCollected {
                score: world.hero.score,
            });
        }
    }
    world.coins.retain(|c| !c.collected);

    if world.hero.body().rect.top() > WORLD_HEIGHT {
        events.push(GameEvent::FellOut);
        hit(world, events);
    }
}

/// Take one life. A fatal hit ends the round; otherwise the hero goes back
/// to the respawn anchor. Returns true if the round ended.
fn hit(world: &mut World, events: &mut Vec<GameEvent>) -> bool {
    let dead = world.hero.take_damage();
    events.push(GameEvent::Hurt {
        lives_left: world.hero.lives,
    });

    if dead {
        world.phase = GamePhase::GameOver;
        world.game_over_time = 0.0;
        events.push(GameEvent::GameOver);
        log::info!("Game over (score {})", world.hero.score);
    } else {
        let anchor = world.hero_spawn();
        world.hero.respawn(anchor);
        events.push(GameEvent::Respawned);
        log::debug!("Hero hit, {} lives left", world.hero.lives);
    }
    dead
}

impl World {
    /// Advance one tick; see [`tick`]
    pub fn update(&mut self, dt: f32) -> Result<Vec<GameEvent>, SimError> {
        tick(self, dt)
    }
}
